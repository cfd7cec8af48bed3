//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Settings for the relation-naming and embedding layers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HypermediaConfig {
    /// Per-type relation overrides (lowercased bare type name -> relation)
    pub relation_overrides: HashMap<String, String>,

    /// Normalize scalar embedded values into single-element collections
    pub prefer_collections: bool,
}

impl HypermediaConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_string(),
                }
            } else {
                ConfigError::Io {
                    message: err.to_string(),
                }
            }
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::debug!(path, "loaded hypermedia configuration");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self {
            relation_overrides: HashMap::from([(
                "employee".to_string(),
                "staff-member".to_string(),
            )]),
            prefer_collections: false,
        }
    }
}
