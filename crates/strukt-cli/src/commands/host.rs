//! Implementation of the `strukt host` command.

use crate::{
    cli::{HostArgs, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: HostArgs, _global: GlobalArgs, _output: OutputManager) -> CliResult<()> {
    let inventory = super::parse_inventory(&args.parse)?;

    let document = inventory
        .host_document(&args.host)
        .ok_or(CliError::HostNotFound {
            host: args.host.clone(),
        })?;

    let json = serde_json::to_string_pretty(&document).unwrap_or_else(|_| "{}".into());
    println!("{json}");

    Ok(())
}
