//! Infrastructure adapters for Strukt.
//!
//! This crate implements the ports defined in `strukt_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod cache;
pub mod constructed;
pub mod inventory;
pub mod source;

// Re-export commonly used adapters
pub use cache::{LocalCache, MemoryCache, cache_key};
pub use constructed::NullRules;
pub use inventory::MemoryInventory;
pub use source::{HttpSource, LocalSource, StaticSource, WorkspaceReader};
