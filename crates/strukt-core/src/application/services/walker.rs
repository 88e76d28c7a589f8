//! Tree walker - the core traversal.
//!
//! Recursively visits deployment nodes, deciding host-ness and
//! hierarchy-group membership, and materializes a host for each eligible
//! node. Traversal context (environment label, hierarchy path, group
//! chain) is passed by value at each recursive call; there is no shared
//! mutable traversal state.

use tracing::{debug, instrument};

use crate::{
    application::ports::Inventory,
    domain::{
        DeploymentNode, HostVars, Model, ParseOptions, STRUCTURAL_TAGS, env_group,
        extract_host_vars, hierarchy_group, tag_group, tech_group,
    },
    error::StruktResult,
};

/// Walks a workspace model and writes hosts/groups into an inventory.
///
/// The walker retains each materialized host's name and variable map so
/// the orchestrator can run the constructed-variables post-pass without
/// reading the store back.
pub struct TreeWalker<'a> {
    inventory: &'a dyn Inventory,
    options: &'a ParseOptions,
    hosts: Vec<(String, HostVars)>,
}

impl<'a> TreeWalker<'a> {
    pub fn new(inventory: &'a dyn Inventory, options: &'a ParseOptions) -> Self {
        Self {
            inventory,
            options,
            hosts: Vec::new(),
        }
    }

    /// Walk every top-level deployment node (one per environment).
    ///
    /// The environment label comes from the node's `environment` field,
    /// falling back to its name. A configured environment filter skips
    /// non-matching subtrees entirely. An environment node without child
    /// deployment nodes is walked itself as the sole entity, so a
    /// single-level deployment node still gets parsed as one host.
    #[instrument(skip_all)]
    pub fn walk_model(&mut self, model: &Model) -> StruktResult<()> {
        for env_node in &model.deployment_nodes {
            let env_name = env_node.environment_label().map(str::to_owned);

            if let Some(filter) = &self.options.environment {
                if env_name.as_deref() != Some(filter.as_str()) {
                    debug!(environment = ?env_name, "Environment filtered out");
                    continue;
                }
            }

            if env_node.children.is_empty() {
                self.walk_node(env_node, env_name.as_deref(), &[], &[])?;
            } else {
                for node in &env_node.children {
                    self.walk_node(node, env_name.as_deref(), &[], &[])?;
                }
            }
        }
        Ok(())
    }

    /// Recursively process one deployment node and its children.
    fn walk_node(
        &mut self,
        node: &DeploymentNode,
        environment: Option<&str>,
        hierarchy: &[String],
        parent_groups: &[String],
    ) -> StruktResult<()> {
        let node_name = node.name.clone().unwrap_or_default();
        let mut current_hierarchy = hierarchy.to_vec();
        current_hierarchy.push(node_name);
        let current_group = hierarchy_group(&current_hierarchy);

        // A node with children mirrors itself as a hierarchy group nested
        // under every ancestor group. A nameless node yields no group name
        // and therefore no group.
        if !node.children.is_empty() && !current_group.is_empty() && self.options.group_by_hierarchy
        {
            self.inventory.add_group(&current_group)?;
            for parent in parent_groups {
                if parent != &current_group {
                    self.inventory.add_child(parent, &current_group)?;
                }
            }
        }

        let group_chain: Vec<String> = if current_group.is_empty() {
            parent_groups.to_vec()
        } else {
            let mut chain = parent_groups.to_vec();
            chain.push(current_group);
            chain
        };

        for child in &node.children {
            self.walk_node(child, environment, &current_hierarchy, &group_chain)?;
        }

        // Leaves become hosts; a non-leaf only does when force-host is set.
        if node.is_leaf() || node.force_host() {
            self.materialize_host(node, environment, &current_hierarchy, &group_chain)?;
        }

        // Attached instance nodes never spawn hierarchy groups of their
        // own; they materialize against the current context.
        if self.options.include_infrastructure_nodes {
            for infra in &node.infrastructure_nodes {
                self.materialize_host(infra, environment, &current_hierarchy, &group_chain)?;
            }
        }

        if self.options.include_software_system_instances {
            for instance in &node.software_system_instances {
                self.materialize_host(instance, environment, &current_hierarchy, &group_chain)?;
            }
        }

        if self.options.include_container_instances {
            for instance in &node.container_instances {
                self.materialize_host(instance, environment, &current_hierarchy, &group_chain)?;
            }
        }

        Ok(())
    }

    /// Materialize a single host: resolve its identifier, register it,
    /// write its variables, and apply every enabled grouping policy.
    ///
    /// A node whose identifier resolves empty is skipped with no side
    /// effects.
    fn materialize_host(
        &mut self,
        node: &DeploymentNode,
        environment: Option<&str>,
        hierarchy: &[String],
        parent_groups: &[String],
    ) -> StruktResult<()> {
        let host = match self.options.host_identifier.resolve(node) {
            Some(host) if !host.is_empty() => host,
            _ => {
                debug!(node = ?node.name, "No usable host identifier, skipping");
                return Ok(());
            }
        };

        self.inventory.add_host(&host)?;

        let vars = extract_host_vars(node, environment, Some(hierarchy), self.options);
        for (key, value) in &vars {
            self.inventory.set_variable(&host, key, value.clone())?;
        }

        if self.options.group_by_environment {
            if let Some(environment) = environment {
                let group = env_group(environment);
                self.inventory.add_group(&group)?;
                self.inventory.add_child(&group, &host)?;
            }
        }

        if self.options.group_by_tags {
            for tag in node.tags() {
                if tag.is_empty() || STRUCTURAL_TAGS.contains(&tag) {
                    continue;
                }
                let group = tag_group(tag);
                self.inventory.add_group(&group)?;
                self.inventory.add_child(&group, &host)?;
            }
        }

        if self.options.group_by_technology {
            if let Some(technology) = node.technology.as_deref().filter(|t| !t.is_empty()) {
                let group = tech_group(technology);
                self.inventory.add_group(&group)?;
                self.inventory.add_child(&group, &host)?;
            }
        }

        if self.options.group_by_hierarchy {
            for group in parent_groups {
                // A host must never be a member of a group sharing its name.
                if group == &host {
                    continue;
                }
                self.inventory.add_group(group)?;
                self.inventory.add_child(group, &host)?;
            }
        }

        debug!(host = %host, "Host materialized");
        self.hosts.push((host, vars));
        Ok(())
    }

    /// Materialized hosts with their variable maps, in discovery order.
    pub fn into_hosts(self) -> Vec<(String, HostVars)> {
        self.hosts
    }
}
