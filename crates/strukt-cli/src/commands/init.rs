//! `strukt init` — create a starter inventory source file.

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::InventoryConfig,
    error::{CliResult, IntoCli as _},
    output::OutputManager,
};

/// Write a commented starter inventory source.
pub fn execute(args: InitArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising inventory source...")?;

    // Bail early if the file already exists and --force was not given.
    if args.path.exists() && !args.force {
        output.warning(&format!(
            "Inventory source already exists at {}  (use --force to overwrite)",
            args.path.display(),
        ))?;
        return Ok(());
    }

    // Ensure parent directory exists.
    if let Some(parent) = args.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_cli_context(|| format!("creating directory '{}'", parent.display()))?;
        }
    }

    std::fs::write(&args.path, InventoryConfig::starter())
        .with_cli_context(|| format!("writing inventory source '{}'", args.path.display()))?;

    output.success(&format!(
        "Inventory source created at {}",
        args.path.display(),
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print("  1. Point 'source' at your workspace JSON export")?;
    output.print(&format!("  2. strukt list -i {}", args.path.display()))?;

    Ok(())
}
