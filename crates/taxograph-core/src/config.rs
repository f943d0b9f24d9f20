//! Configuration for taxograph
//!
//! Read from `config.toml` in the taxograph config directory
//! (`~/.config/taxograph/` unless overridden), or from an explicit path.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaxoError};

const CONFIG_DIR: &str = "taxograph";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "TAXOGRAPH_CONFIG_DIR";

/// Identifier given to the document element of a source tree
pub const DEFAULT_ROOT_ID: &str = "root";

/// Input path used when neither the CLI nor the config names one
pub const DEFAULT_INPUT: &str = "structure_released.xml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Graph construction settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Source document settings
    #[serde(default)]
    pub source: SourceConfig,
}

/// Graph construction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Identifier assigned to the document element
    #[serde(default = "default_root_id")]
    pub root_id: String,

    /// Drop repeated entries from `child_ids` while building
    #[serde(default)]
    pub dedup_child_ids: bool,

    /// Run the full acyclicity check during load
    #[serde(default)]
    pub check_acyclic: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            root_id: default_root_id(),
            dedup_child_ids: false,
            check_acyclic: false,
        }
    }
}

/// Source document settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Tag of the elements that become graph nodes
    #[serde(default = "default_element_tag")]
    pub element_tag: String,

    /// Attribute holding a node identifier
    #[serde(default = "default_id_attribute")]
    pub id_attribute: String,

    /// Default input document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            element_tag: default_element_tag(),
            id_attribute: default_id_attribute(),
            input: None,
        }
    }
}

fn default_root_id() -> String {
    DEFAULT_ROOT_ID.to_string()
}

fn default_element_tag() -> String {
    "synset".to_string()
}

fn default_id_attribute() -> String {
    "wnid".to_string()
}

impl Config {
    /// Path of the default config file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    TaxoError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TaxoError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load an explicit config file, or the default one if it exists
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Resolve the input document path
    pub fn input_path(&self, cli_input: Option<&Path>) -> PathBuf {
        cli_input
            .map(Path::to_path_buf)
            .or_else(|| self.source.input.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.graph.root_id, "root");
        assert!(!config.graph.dedup_child_ids);
        assert!(!config.graph.check_acyclic);
        assert_eq!(config.source.element_tag, "synset");
        assert_eq!(config.source.id_attribute, "wnid");
        assert!(config.source.input.is_none());
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[graph]\ndedup_child_ids = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.graph.dedup_child_ids);
        assert_eq!(config.graph.root_id, "root");
        assert_eq!(config.source, SourceConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[graph\nroot_id = ").unwrap();

        assert!(matches!(Config::load(&path), Err(TaxoError::Toml(_))));
    }

    #[test]
    fn test_discover_explicit_missing_file() {
        let dir = tempdir().unwrap();
        let result = Config::discover(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(TaxoError::Other(_))));
    }

    #[test]
    fn test_input_path_precedence() {
        let mut config = Config::default();
        assert_eq!(config.input_path(None), PathBuf::from(DEFAULT_INPUT));

        config.source.input = Some(PathBuf::from("from-config.xml"));
        assert_eq!(config.input_path(None), PathBuf::from("from-config.xml"));
        assert_eq!(
            config.input_path(Some(Path::new("from-cli.xml"))),
            PathBuf::from("from-cli.xml")
        );
    }
}
