//! Core domain layer for Strukt.
//!
//! This module contains pure business logic with ZERO external dependencies
//! beyond serde. All I/O (reading workspaces, writing inventory state) is
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Total operations**: Normalization, naming, and variable extraction
//!   never fail — malformed optional input degrades to empty values
//! - **Immutable entities**: Workspace data is never mutated after parse

// Public API - what the world sees
pub mod naming;
pub mod node;
pub mod options;
pub mod properties;
pub mod vars;

// Re-exports for convenience
pub use naming::{HostIdentifier, env_group, hierarchy_group, sanitize_group_name, tag_group, tech_group};
pub use node::{DeploymentNode, Model, Workspace};
pub use options::ParseOptions;
pub use properties::PropertyMap;
pub use vars::{ANSIBLE_PREFIX, FORCE_HOST_PROPERTY, HostVars, STRUCTURAL_TAGS, extract_host_vars};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn node_from(value: serde_json::Value) -> DeploymentNode {
        serde_json::from_value(value).expect("valid node JSON")
    }

    // ========================================================================
    // Sanitization Tests
    // ========================================================================

    #[test]
    fn sanitize_lowercases_and_replaces() {
        assert_eq!(sanitize_group_name("Production"), "production");
        assert_eq!(sanitize_group_name("EU-West"), "eu_west");
        assert_eq!(sanitize_group_name("US East 1"), "us_east_1");
        assert_eq!(sanitize_group_name("web@server#1"), "web_server_1");
    }

    #[test]
    fn sanitize_guards_leading_digit() {
        assert_eq!(sanitize_group_name("123-numeric"), "_123_numeric");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for name in ["Production", "EU-West", "123-numeric", "web@server#1"] {
            let once = sanitize_group_name(name);
            assert_eq!(sanitize_group_name(&once), once);
        }
    }

    #[test]
    fn sanitize_empty_is_empty() {
        assert_eq!(sanitize_group_name(""), "");
    }

    #[test]
    fn sanitized_names_match_charset() {
        for name in ["Ubuntu 22.04", "AWS ALB", "Ångström-1", "9lives"] {
            let s = sanitize_group_name(name);
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
            assert!(!s.starts_with(|c: char| c.is_ascii_digit()));
        }
    }

    // ========================================================================
    // Property Normalization Tests
    // ========================================================================

    #[test]
    fn properties_absent_is_empty() {
        let node = node_from(json!({"name": "web"}));
        assert!(node.normalized_properties().is_empty());
    }

    #[test]
    fn properties_empty_shapes_are_empty() {
        let list = node_from(json!({"name": "web", "properties": []}));
        let map = node_from(json!({"name": "web", "properties": {}}));
        assert!(list.normalized_properties().is_empty());
        assert!(map.normalized_properties().is_empty());
    }

    #[test]
    fn properties_list_and_map_agree() {
        let list = node_from(json!({
            "name": "web",
            "properties": [
                {"name": "fqdn", "value": "web.example.com"},
                {"name": "rack", "value": "r12"}
            ]
        }));
        let map = node_from(json!({
            "name": "web",
            "properties": {"fqdn": "web.example.com", "rack": "r12"}
        }));

        let from_list = list.normalized_properties();
        let from_map = map.normalized_properties();
        assert_eq!(from_list.get("fqdn"), from_map.get("fqdn"));
        assert_eq!(from_list.get("rack"), from_map.get("rack"));
        assert_eq!(from_list.len(), from_map.len());
    }

    #[test]
    fn properties_unrecognized_shape_is_empty() {
        let node = node_from(json!({"name": "web", "properties": "oops"}));
        assert!(node.normalized_properties().is_empty());
    }

    #[test]
    fn properties_list_duplicates_last_write_wins() {
        let node = node_from(json!({
            "name": "web",
            "properties": [
                {"name": "rack", "value": "r1"},
                {"name": "rack", "value": "r2"}
            ]
        }));
        let props = node.normalized_properties();
        assert_eq!(props.get("rack"), Some("r2"));
        assert_eq!(props.len(), 1);
    }

    // ========================================================================
    // Host Identifier Tests
    // ========================================================================

    #[test]
    fn identifier_by_name() {
        let node = node_from(json!({"name": "web-server-01", "id": "123"}));
        assert_eq!(
            HostIdentifier::Name.resolve(&node),
            Some("web-server-01".into())
        );
    }

    #[test]
    fn identifier_by_id() {
        let node = node_from(json!({"name": "web-server-01", "id": "123"}));
        assert_eq!(HostIdentifier::Id.resolve(&node), Some("123".into()));
    }

    #[test]
    fn identifier_by_id_falls_back_to_name() {
        let node = node_from(json!({"name": "web-server-01"}));
        assert_eq!(
            HostIdentifier::Id.resolve(&node),
            Some("web-server-01".into())
        );
    }

    #[test]
    fn identifier_by_property() {
        let node = node_from(json!({
            "name": "web-server-01",
            "id": "123",
            "properties": [{"name": "fqdn", "value": "web-server-01.example.com"}]
        }));
        assert_eq!(
            HostIdentifier::Property("fqdn".into()).resolve(&node),
            Some("web-server-01.example.com".into())
        );
    }

    #[test]
    fn identifier_by_property_falls_back_to_name() {
        let node = node_from(json!({"name": "web-server-01", "id": "123", "properties": []}));
        assert_eq!(
            HostIdentifier::Property("fqdn".into()).resolve(&node),
            Some("web-server-01".into())
        );
    }

    #[test]
    fn identifier_missing_everything_is_none() {
        let node = node_from(json!({"id": "123"}));
        assert_eq!(HostIdentifier::Name.resolve(&node), None);
    }

    // ========================================================================
    // Node Helper Tests
    // ========================================================================

    #[test]
    fn leaf_detection() {
        let leaf = node_from(json!({"name": "server", "children": []}));
        let parent = node_from(json!({"name": "dc", "children": [{"name": "server"}]}));
        assert!(leaf.is_leaf());
        assert!(!parent.is_leaf());
    }

    #[test]
    fn force_host_is_case_insensitive() {
        for value in ["true", "TRUE", "True"] {
            let node = node_from(json!({
                "name": "cluster",
                "children": [{"name": "n1"}],
                "properties": {"ansible_force_host": value}
            }));
            assert!(node.force_host(), "value {value:?} should force host");
        }
    }

    #[test]
    fn force_host_other_values_do_not_promote() {
        let node = node_from(json!({
            "name": "cluster",
            "children": [{"name": "n1"}],
            "properties": {"ansible_force_host": "yes"}
        }));
        assert!(!node.force_host());
    }

    #[test]
    fn tags_split_and_trim() {
        let node = node_from(json!({"name": "web", "tags": "Element, Deployment Node ,Web"}));
        assert_eq!(node.tags(), vec!["Element", "Deployment Node", "Web"]);
    }
}
