//! Strukt Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Strukt
//! inventory tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           strukt-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (InventoryService, TreeWalker)        │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Inventory, Source, Cache, ...) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      strukt-adapters (Infrastructure)   │
//! │  (MemoryInventory, WorkspaceReader, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (DeploymentNode, PropertyMap, naming)  │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use strukt_core::{
//!     application::InventoryService,
//!     domain::ParseOptions,
//! };
//!
//! // 1. Resolve options (the CLI builds these from the inventory config)
//! let options = ParseOptions::default();
//!
//! // 2. Use application service (with injected adapters)
//! let service = InventoryService::new(reader, rules, options)
//!     .with_source("./workspace.json");
//! service.parse(&inventory)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InventoryService, ParseSummary,
        ports::{CacheStore, ConstructedRules, Inventory, WorkspaceSource},
    };
    pub use crate::domain::{
        DeploymentNode, HostIdentifier, HostVars, Model, ParseOptions, PropertyMap, Workspace,
        sanitize_group_name,
    };
    pub use crate::error::{StruktError, StruktResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
