//! Structurizr workspace data model.
//!
//! A workspace export is `{"model": {"deploymentNodes": [...]}}`. Deployment
//! nodes nest through `children`; infrastructure nodes and the two instance
//! kinds hang off a deployment node and never nest. All four shapes share
//! the same fields, so one struct models them all — the only behavioral
//! difference is whether a node recurses.
//!
//! Every field except the tree structure is optional: a missing `id`,
//! `tags`, or `properties` is data, not an error.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::properties::PropertyMap;
use crate::domain::vars::FORCE_HOST_PROPERTY;

/// Top-level workspace document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub model: Model,
}

/// The architecture model; only deployment nodes matter for inventory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Model {
    #[serde(rename = "deploymentNodes", default)]
    pub deployment_nodes: Vec<DeploymentNode>,
}

/// A deployment node, infrastructure node, or instance.
///
/// Instance kinds (`infrastructureNodes`, `softwareSystemInstances`,
/// `containerInstances`) deserialize into this same struct with empty
/// child collections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeploymentNode {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Environment label; only meaningful on top-level nodes.
    pub environment: Option<String>,
    pub description: Option<String>,
    pub technology: Option<String>,
    /// Comma-separated tag string, order preserved.
    pub tags: Option<String>,
    /// Raw property value; the export uses either a list of name/value
    /// pairs or a direct mapping, so the shape is resolved lazily by
    /// [`Self::normalized_properties`].
    pub properties: Option<Value>,
    #[serde(default)]
    pub children: Vec<DeploymentNode>,
    #[serde(rename = "infrastructureNodes", default)]
    pub infrastructure_nodes: Vec<DeploymentNode>,
    #[serde(rename = "softwareSystemInstances", default)]
    pub software_system_instances: Vec<DeploymentNode>,
    #[serde(rename = "containerInstances", default)]
    pub container_instances: Vec<DeploymentNode>,
}

impl DeploymentNode {
    /// A leaf has no child deployment nodes.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether the force-host property promotes this node to a host even
    /// though it has children. The comparison is case-insensitive.
    pub fn force_host(&self) -> bool {
        self.normalized_properties()
            .get(FORCE_HOST_PROPERTY)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    /// Normalize `properties` into one canonical mapping regardless of the
    /// source shape. Absent or unrecognized shapes yield an empty mapping.
    pub fn normalized_properties(&self) -> PropertyMap {
        PropertyMap::from_raw(self.properties.as_ref())
    }

    /// Split the tag string on commas and trim each element. Order is
    /// preserved; empty elements are kept (grouping filters them later).
    pub fn tags(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|t| t.split(',').map(str::trim).collect())
            .unwrap_or_default()
    }

    /// Environment label for a top-level node: the explicit `environment`
    /// field, falling back to the node's name.
    pub fn environment_label(&self) -> Option<&str> {
        self.environment.as_deref().or(self.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn workspace_parses_minimal_document() {
        let ws: Workspace = serde_json::from_value(json!({"model": {"deploymentNodes": []}}))
            .expect("minimal workspace");
        assert!(ws.model.deployment_nodes.is_empty());
    }

    #[test]
    fn workspace_tolerates_missing_model() {
        let ws: Workspace = serde_json::from_value(json!({})).expect("empty workspace");
        assert!(ws.model.deployment_nodes.is_empty());
    }

    #[test]
    fn node_parses_camel_case_collections() {
        let node: DeploymentNode = serde_json::from_value(json!({
            "name": "dc",
            "children": [{"name": "rack"}],
            "infrastructureNodes": [{"name": "lb"}],
            "softwareSystemInstances": [{"name": "crm"}],
            "containerInstances": [{"name": "api"}]
        }))
        .expect("full node");

        assert_eq!(node.children.len(), 1);
        assert_eq!(node.infrastructure_nodes.len(), 1);
        assert_eq!(node.software_system_instances.len(), 1);
        assert_eq!(node.container_instances.len(), 1);
    }

    #[test]
    fn environment_label_falls_back_to_name() {
        let explicit: DeploymentNode =
            serde_json::from_value(json!({"name": "DC-1", "environment": "Production"})).unwrap();
        let implicit: DeploymentNode = serde_json::from_value(json!({"name": "Staging"})).unwrap();

        assert_eq!(explicit.environment_label(), Some("Production"));
        assert_eq!(implicit.environment_label(), Some("Staging"));
    }

    #[test]
    fn tags_on_missing_field_are_empty() {
        let node = DeploymentNode::default();
        assert!(node.tags().is_empty());
    }
}
