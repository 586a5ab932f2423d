//! Error catalog configuration.
//!
//! Applications declare their domain errors once, in a TOML file, and look
//! them up by name at runtime instead of scattering literals through code.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Catalog-wide settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Named error definitions, keyed by lookup name
    #[serde(default)]
    pub errors: BTreeMap<String, ErrorSpec>,
}

/// Catalog-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Status for entries that do not set one (default: 400)
    #[serde(default = "default_status")]
    pub default_status: i32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_status: default_status(),
        }
    }
}

fn default_status() -> i32 {
    crate::models::Error::DEFAULT_STATUS
}

/// A single error definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSpec {
    /// Short identifier, e.g. "User.NotFound"
    pub code: String,

    /// Human-readable description
    #[serde(default)]
    pub message: String,

    /// Classification status (falls back to `catalog.default_status`)
    #[serde(default)]
    pub status: Option<i32>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source: e,
        })
    }

    /// Status an entry resolves to.
    pub fn status_of(&self, spec: &ErrorSpec) -> i32 {
        spec.status.unwrap_or(self.catalog.default_status)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid catalog entry '{name}': {reason}")]
    Invalid { name: String, reason: String },
}
