//! Command handlers.
//!
//! Each handler translates CLI arguments into core calls and displays
//! results. The shared [`parse_inventory`] runner wires the adapters
//! (source reader, cache, constructed rules) into an `InventoryService`
//! and runs one parse; no business logic lives in this layer.

pub mod completions;
pub mod graph;
pub mod host;
pub mod init;
pub mod list;

use std::path::Path;

use tracing::{debug, info};

use strukt_adapters::{LocalCache, MemoryInventory, NullRules, WorkspaceReader, cache_key};
use strukt_core::application::InventoryService;

use crate::{
    cli::ParseArgs,
    config::InventoryConfig,
    error::{CliResult, IntoCli as _},
};

/// Load the inventory source config and run one parse.
pub(crate) fn parse_inventory(args: &ParseArgs) -> CliResult<MemoryInventory> {
    let config = InventoryConfig::load(&args.inventory)?;
    let options = config.to_parse_options(args.environment.as_deref());

    debug!(
        source = config.source.as_deref().unwrap_or("<missing>"),
        environment = options.environment.as_deref().unwrap_or("<all>"),
        cache = config.cache,
        "Inventory source resolved"
    );

    // Relative workspace paths resolve against the config file directory.
    let base_dir = args
        .inventory
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let reader = WorkspaceReader::with_base_dir(base_dir);

    let mut service =
        InventoryService::new(Box::new(reader), Box::new(NullRules::new()), options);

    if let Some(source) = &config.source {
        service = service.with_source(source);
    }

    if config.cache {
        let dir = config
            .cache_dir
            .clone()
            .unwrap_or_else(LocalCache::default_dir);
        service = service
            .with_cache(Box::new(LocalCache::new(dir)), cache_key(&args.inventory))
            .with_flush_cache(args.flush_cache);
    }

    let inventory = MemoryInventory::new();
    let summary = service.parse(&inventory).with_cli_context(|| "parsing workspace")?;

    info!(hosts = summary.hosts, "Inventory parsed");
    Ok(inventory)
}
