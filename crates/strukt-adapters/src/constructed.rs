//! Constructed-variables adapters.
//!
//! The compose/groups/keyed_groups expression engine is an external
//! collaborator; strukt only defines the seam and ships a no-op
//! implementation for deployments that do not use constructed rules.

use strukt_core::{
    application::ports::{ConstructedRules, Inventory},
    domain::HostVars,
    error::StruktResult,
};

/// Applies no rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRules;

impl NullRules {
    pub fn new() -> Self {
        Self
    }
}

impl ConstructedRules for NullRules {
    fn apply(&self, _inventory: &dyn Inventory, _host: &str, _vars: &HostVars) -> StruktResult<()> {
        Ok(())
    }
}
