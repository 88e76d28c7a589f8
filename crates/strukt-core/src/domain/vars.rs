//! Host variable extraction.

use serde_json::Value;

use crate::domain::node::DeploymentNode;
use crate::domain::options::ParseOptions;

/// Properties with this name prefix always pass through unprefixed.
pub const ANSIBLE_PREFIX: &str = "ansible_";

/// Property that promotes a non-leaf node to host status when its value is
/// `"true"` (case-insensitive).
pub const FORCE_HOST_PROPERTY: &str = "ansible_force_host";

/// Structural tags that never become tag groups.
pub const STRUCTURAL_TAGS: [&str; 3] = ["Element", "Deployment Node", "Infrastructure Node"];

/// Ordered variable mapping for one host, as written to the inventory.
pub type HostVars = Vec<(String, Value)>;

/// Extract the full variable mapping for a host.
///
/// Fixed keys first (`structurizr_id`, `structurizr_name`, optional
/// description/technology/tags, the environment label and hierarchy path
/// when supplied), then every normalized property: names starting with
/// [`ANSIBLE_PREFIX`] or listed in the passthrough allow-list are stored
/// verbatim, everything else goes under the configured prefix.
pub fn extract_host_vars(
    node: &DeploymentNode,
    environment: Option<&str>,
    hierarchy: Option<&[String]>,
    options: &ParseOptions,
) -> HostVars {
    let mut vars: HostVars = Vec::new();

    vars.push(("structurizr_id".into(), opt_string(&node.id)));
    vars.push(("structurizr_name".into(), opt_string(&node.name)));

    if let Some(description) = node.description.as_deref().filter(|d| !d.is_empty()) {
        vars.push(("structurizr_description".into(), description.into()));
    }

    if let Some(technology) = node.technology.as_deref().filter(|t| !t.is_empty()) {
        vars.push(("technology".into(), technology.into()));
    }

    if node.tags.as_deref().is_some_and(|t| !t.is_empty()) {
        let tags: Vec<Value> = node.tags().into_iter().map(Value::from).collect();
        vars.push(("structurizr_tags".into(), Value::Array(tags)));
    }

    if let Some(environment) = environment {
        vars.push(("structurizr_environment".into(), environment.into()));
    }

    if let Some(hierarchy) = hierarchy {
        let path: Vec<Value> = hierarchy.iter().map(|h| Value::from(h.as_str())).collect();
        vars.push(("structurizr_hierarchy".into(), Value::Array(path)));
    }

    for (name, value) in node.normalized_properties().iter() {
        let key = if name.starts_with(ANSIBLE_PREFIX)
            || options.passthrough.iter().any(|p| p == name)
        {
            name.to_owned()
        } else {
            format!("{}{}", options.property_prefix, name)
        };
        set_var(&mut vars, key, value.into());
    }

    vars
}

/// Last write wins when a property shadows an earlier key.
fn set_var(vars: &mut HostVars, key: String, value: Value) {
    if let Some(entry) = vars.iter_mut().find(|(k, _)| *k == key) {
        entry.1 = value;
    } else {
        vars.push((key, value));
    }
}

fn opt_string(value: &Option<String>) -> Value {
    value.as_deref().map(Value::from).unwrap_or(Value::Null)
}
