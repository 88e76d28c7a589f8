//! Implementation of the `strukt list` command.

use crate::{
    cli::{ListArgs, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, _output: OutputManager) -> CliResult<()> {
    let inventory = super::parse_inventory(&args.parse)?;
    let document = inventory.to_dynamic_inventory();

    // Serialise straight to stdout (bypasses OutputManager because the
    // JSON must be parseable even in non-TTY pipes). Serialising a Value
    // tree cannot fail.
    let json = if args.compact {
        serde_json::to_string(&document)
    } else {
        serde_json::to_string_pretty(&document)
    }
    .unwrap_or_else(|_| "{}".into());
    println!("{json}");

    Ok(())
}
