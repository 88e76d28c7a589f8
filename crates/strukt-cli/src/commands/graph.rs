//! Implementation of the `strukt graph` command.

use crate::{
    cli::{GraphArgs, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: GraphArgs, _global: GlobalArgs, _output: OutputManager) -> CliResult<()> {
    let inventory = super::parse_inventory(&args.parse)?;

    // The tree is the command's payload, not a status message — print it
    // even under --quiet.
    print!("{}", inventory.graph());

    Ok(())
}
