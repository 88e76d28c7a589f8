//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the one
//! high-level use case: "parse a workspace into an inventory".

pub mod inventory_service;
pub mod walker;

pub use inventory_service::{InventoryService, ParseSummary};
pub use walker::TreeWalker;
