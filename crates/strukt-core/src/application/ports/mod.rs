//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `strukt-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Inventory`: The mutable host/group/variable store
//!   - `WorkspaceSource`: Raw workspace retrieval (file or URL)
//!   - `CacheStore`: Cached workspace payloads
//!   - `ConstructedRules`: Post-parse composite-variable rules
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CacheStore, ConstructedRules, Inventory, WorkspaceSource};
