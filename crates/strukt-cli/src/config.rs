//! Inventory source configuration.
//!
//! An inventory source is a YAML document naming this plugin and pointing
//! at a workspace export:
//!
//! ```yaml
//! plugin: structurizr
//! source: ./workspace.json
//! environment: Production
//! group_by_technology: true
//! ```
//!
//! The CLI layer owns this file; the core crate only ever sees the
//! resolved [`ParseOptions`].  Unknown keys are tolerated (constructed-rule
//! sections live in the same document but belong to an external
//! subsystem).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use strukt_core::domain::{HostIdentifier, ParseOptions};

use crate::error::{CliError, CliResult, IntoCli as _};

/// Accepted `plugin` tokens marking a file as a strukt inventory source.
const PLUGIN_TOKENS: [&str; 2] = ["structurizr", "strukt"];

/// Parsed inventory source document.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryConfig {
    /// Token that ensures this file is meant for this tool.
    pub plugin: String,
    /// Path or URL of the workspace export.  Absence is reported by the
    /// parse call, not here.
    pub source: Option<String>,
    pub environment: Option<String>,
    #[serde(default = "default_true")]
    pub include_infrastructure_nodes: bool,
    #[serde(default)]
    pub include_software_system_instances: bool,
    #[serde(default)]
    pub include_container_instances: bool,
    #[serde(default = "default_true")]
    pub group_by_environment: bool,
    #[serde(default = "default_true")]
    pub group_by_tags: bool,
    #[serde(default)]
    pub group_by_technology: bool,
    #[serde(default = "default_true")]
    pub group_by_hierarchy: bool,
    #[serde(default)]
    pub host_identifier: HostIdentifier,
    #[serde(default)]
    pub property_prefix: String,
    #[serde(default)]
    pub ansible_property_passthrough: Vec<String>,
    /// Cache the raw workspace payload between runs.
    #[serde(default)]
    pub cache: bool,
    /// Cache directory; defaults to the platform cache dir.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl InventoryConfig {
    /// Load and verify an inventory source file.
    ///
    /// A source file must have a `.yml`/`.yaml` extension and carry a
    /// recognized `plugin` token; anything else is rejected before any
    /// workspace I/O happens.
    pub fn load(path: &Path) -> CliResult<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !matches!(extension, "yml" | "yaml") {
            return Err(CliError::InvalidSourceFile {
                path: path.to_path_buf(),
                reason: "expected a .yml or .yaml file".into(),
            });
        }

        let raw = std::fs::read_to_string(path)
            .with_cli_context(|| format!("reading inventory source '{}'", path.display()))?;

        let config: Self = serde_yaml::from_str(&raw).map_err(|e| CliError::ConfigError {
            message: format!("invalid inventory source '{}': {}", path.display(), e),
            source: Some(Box::new(e)),
        })?;

        if !PLUGIN_TOKENS.contains(&config.plugin.as_str()) {
            return Err(CliError::InvalidSourceFile {
                path: path.to_path_buf(),
                reason: format!(
                    "plugin token '{}' is not one of: {}",
                    config.plugin,
                    PLUGIN_TOKENS.join(", ")
                ),
            });
        }

        Ok(config)
    }

    /// Resolve this document into the core option surface.
    ///
    /// `environment_override` is the `--environment` flag; it wins over the
    /// config file.
    pub fn to_parse_options(&self, environment_override: Option<&str>) -> ParseOptions {
        ParseOptions {
            environment: environment_override
                .map(str::to_owned)
                .or_else(|| self.environment.clone()),
            include_infrastructure_nodes: self.include_infrastructure_nodes,
            include_software_system_instances: self.include_software_system_instances,
            include_container_instances: self.include_container_instances,
            group_by_environment: self.group_by_environment,
            group_by_tags: self.group_by_tags,
            group_by_technology: self.group_by_technology,
            group_by_hierarchy: self.group_by_hierarchy,
            host_identifier: self.host_identifier.clone(),
            property_prefix: self.property_prefix.clone(),
            passthrough: self.ansible_property_passthrough.clone(),
        }
    }

    /// Starter document written by `strukt init`.
    pub fn starter() -> &'static str {
        "\
# Strukt inventory source.
# Point `source` at a Structurizr workspace JSON export (path or URL).
plugin: structurizr
source: ./workspace.json

# Optional settings (defaults shown):
# environment: Production
# include_infrastructure_nodes: true
# include_software_system_instances: false
# include_container_instances: false
# group_by_environment: true
# group_by_tags: true
# group_by_technology: false
# group_by_hierarchy: true
# host_identifier: name
# property_prefix: \"\"
# ansible_property_passthrough: []
# cache: false
"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use strukt_core::domain::HostIdentifier;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn minimal_config_loads_with_defaults() {
        let file = write_config("plugin: structurizr\nsource: ./workspace.json\n");
        let config = InventoryConfig::load(file.path()).unwrap();

        assert_eq!(config.source.as_deref(), Some("./workspace.json"));
        assert!(config.include_infrastructure_nodes);
        assert!(!config.group_by_technology);
        assert!(!config.cache);

        let options = config.to_parse_options(None);
        assert_eq!(options.host_identifier, HostIdentifier::Name);
        assert!(options.environment.is_none());
    }

    #[test]
    fn full_config_round_trips() {
        let file = write_config(
            "plugin: structurizr\n\
             source: https://example.com/workspace.json\n\
             environment: Production\n\
             include_container_instances: true\n\
             group_by_technology: true\n\
             host_identifier: fqdn\n\
             property_prefix: structurizr_\n\
             ansible_property_passthrough: [fqdn]\n\
             cache: true\n",
        );
        let config = InventoryConfig::load(file.path()).unwrap();
        let options = config.to_parse_options(None);

        assert_eq!(options.environment.as_deref(), Some("Production"));
        assert!(options.include_container_instances);
        assert!(options.group_by_technology);
        assert_eq!(options.host_identifier, HostIdentifier::Property("fqdn".into()));
        assert_eq!(options.property_prefix, "structurizr_");
        assert_eq!(options.passthrough, vec!["fqdn".to_string()]);
        assert!(config.cache);
    }

    #[test]
    fn environment_flag_overrides_config() {
        let file = write_config("plugin: structurizr\nenvironment: Staging\n");
        let config = InventoryConfig::load(file.path()).unwrap();
        let options = config.to_parse_options(Some("Production"));
        assert_eq!(options.environment.as_deref(), Some("Production"));
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let file = write_config(
            "plugin: structurizr\nsource: ./w.json\ncompose:\n  ansible_host: structurizr_ip\n",
        );
        assert!(InventoryConfig::load(file.path()).is_ok());
    }

    #[test]
    fn non_yaml_extension_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "plugin: structurizr\n").unwrap();

        let err = InventoryConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CliError::InvalidSourceFile { .. }));
    }

    #[test]
    fn wrong_plugin_token_is_rejected() {
        let file = write_config("plugin: something_else\nsource: ./w.json\n");
        let err = InventoryConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CliError::InvalidSourceFile { .. }));
    }

    #[test]
    fn missing_plugin_token_is_a_config_error() {
        let file = write_config("source: ./w.json\n");
        let err = InventoryConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn starter_config_parses() {
        let config: InventoryConfig = serde_yaml::from_str(InventoryConfig::starter()).unwrap();
        assert_eq!(config.plugin, "structurizr");
        assert_eq!(config.source.as_deref(), Some("./workspace.json"));
    }
}
