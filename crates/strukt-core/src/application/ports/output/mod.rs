//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strukt-adapters` crate provides implementations.

use serde_json::Value;

use crate::domain::HostVars;
use crate::error::StruktResult;

/// Port for the inventory store.
///
/// Implemented by:
/// - `strukt_adapters::inventory::MemoryInventory` (production and testing)
///
/// ## Design Notes
///
/// The four operations below define every observable effect of a parse.
/// The core writes hosts, groups, parent/child edges, and variables as it
/// discovers them and never reads the store back.
pub trait Inventory: Send + Sync {
    /// Register a host.
    fn add_host(&self, name: &str) -> StruktResult<()>;

    /// Register a group. Registering an existing group is a no-op.
    fn add_group(&self, name: &str) -> StruktResult<()>;

    /// Register `child` (a host or a group) under group `parent`.
    fn add_child(&self, parent: &str, child: &str) -> StruktResult<()>;

    /// Set a host variable.
    fn set_variable(&self, host: &str, key: &str, value: Value) -> StruktResult<()>;
}

/// Port for retrieving the raw workspace document.
///
/// Implemented by:
/// - `strukt_adapters::source::WorkspaceReader` (file + URL dispatch)
/// - `strukt_adapters::source::StaticSource` (testing)
pub trait WorkspaceSource: Send + Sync {
    /// Return the raw JSON text behind `source` (a path or URL).
    fn read(&self, source: &str) -> StruktResult<String>;
}

/// Port for caching raw workspace payloads between runs.
///
/// Implemented by:
/// - `strukt_adapters::cache::LocalCache` (one file per key)
/// - `strukt_adapters::cache::MemoryCache` (testing)
pub trait CacheStore: Send + Sync {
    /// Look up a cached payload. `Ok(None)` is a miss.
    fn get(&self, key: &str) -> StruktResult<Option<String>>;

    /// Store a payload under `key`, replacing any previous entry.
    fn set(&self, key: &str, payload: &str) -> StruktResult<()>;
}

/// Port for the constructed-variables subsystem.
///
/// The expression engine behind compose/groups/keyed_groups is an external
/// collaborator; the core only revisits each materialized host once after
/// the walk and hands it through this seam.
pub trait ConstructedRules: Send + Sync {
    /// Apply composite-variable and keyed-group rules to one host.
    fn apply(&self, inventory: &dyn Inventory, host: &str, vars: &HostVars) -> StruktResult<()>;
}
