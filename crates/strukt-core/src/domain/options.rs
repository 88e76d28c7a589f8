//! Parse options.
//!
//! [`ParseOptions`] is the core's view of the inventory source
//! configuration. The CLI layer owns the config file; it resolves the
//! option surface into this value object and passes it down by value — the
//! core never reads configuration itself.

use crate::domain::naming::HostIdentifier;

/// Resolved option surface for one parse run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Restrict the walk to one environment label; `None` includes all.
    pub environment: Option<String>,
    /// Materialize infrastructure nodes as hosts.
    pub include_infrastructure_nodes: bool,
    /// Materialize software system instances as hosts.
    pub include_software_system_instances: bool,
    /// Materialize container instances as hosts.
    pub include_container_instances: bool,
    /// Create `env_*` groups.
    pub group_by_environment: bool,
    /// Create `tag_*` groups.
    pub group_by_tags: bool,
    /// Create `tech_*` groups.
    pub group_by_technology: bool,
    /// Create nested groups mirroring the deployment node hierarchy.
    pub group_by_hierarchy: bool,
    /// Which node field supplies the host key.
    pub host_identifier: HostIdentifier,
    /// Prefix applied to non-passthrough properties (may be empty).
    pub property_prefix: String,
    /// Extra property names exempted from prefixing.
    pub passthrough: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            environment: None,
            include_infrastructure_nodes: true,
            include_software_system_instances: false,
            include_container_instances: false,
            group_by_environment: true,
            group_by_tags: true,
            group_by_technology: false,
            group_by_hierarchy: true,
            host_identifier: HostIdentifier::Name,
            property_prefix: String::new(),
            passthrough: Vec::new(),
        }
    }
}
