//! Group naming and host identifier resolution.

use serde::Deserialize;

use crate::domain::node::DeploymentNode;

/// Convert a name to a valid inventory group name.
///
/// Every character outside `[A-Za-z0-9_]` becomes an underscore, the
/// result is lowercased, and a leading digit gets a `_` prefix. Sanitizing
/// an already-sanitized name is a no-op.
pub fn sanitize_group_name(name: &str) -> String {
    let mut sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.starts_with(|c: char| c.is_ascii_digit()) {
        sanitized.insert(0, '_');
    }
    sanitized
}

/// `env_<label>` group name.
pub fn env_group(label: &str) -> String {
    sanitize_group_name(&format!("env_{label}"))
}

/// `tag_<tag>` group name.
pub fn tag_group(tag: &str) -> String {
    sanitize_group_name(&format!("tag_{tag}"))
}

/// `tech_<technology>` group name.
pub fn tech_group(technology: &str) -> String {
    sanitize_group_name(&format!("tech_{technology}"))
}

/// Group name for a hierarchy path: the sanitized underscore-join of the
/// ancestor names.
pub fn hierarchy_group(path: &[String]) -> String {
    sanitize_group_name(&path.join("_"))
}

/// Which node field supplies the host's unique key.
///
/// Deserializes from the `host_identifier` option string: `"name"` and
/// `"id"` select the corresponding field; any other value names a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostIdentifier {
    Name,
    Id,
    Property(String),
}

impl Default for HostIdentifier {
    fn default() -> Self {
        Self::Name
    }
}

impl From<&str> for HostIdentifier {
    fn from(mode: &str) -> Self {
        match mode {
            "name" => Self::Name,
            "id" => Self::Id,
            other => Self::Property(other.to_owned()),
        }
    }
}

impl<'de> Deserialize<'de> for HostIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mode = String::deserialize(deserializer)?;
        Ok(Self::from(mode.as_str()))
    }
}

impl HostIdentifier {
    /// Resolve the host identifier for a node.
    ///
    /// Never fails: `Id` falls back to the name when `id` is absent, and a
    /// missing property falls back to the name. The caller treats `None`
    /// (or an empty string) as "skip this node".
    pub fn resolve(&self, node: &DeploymentNode) -> Option<String> {
        match self {
            Self::Name => node.name.clone(),
            Self::Id => node.id.clone().or_else(|| node.name.clone()),
            Self::Property(prop) => node
                .normalized_properties()
                .get(prop)
                .map(str::to_owned)
                .or_else(|| node.name.clone()),
        }
    }
}
