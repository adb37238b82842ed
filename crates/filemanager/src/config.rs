//! Client configuration
//!
//! Reads config from ~/.config/poseidon/filemanager.toml

use std::path::{Path, PathBuf};

use poseidon_fm_protocol::DEFAULT_BASE_URL;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Remote client configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port of the file-manager service
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Self {
        Self::load_or_default(&Self::default_config_path())
    }

    /// Load from `path` if it exists and parses, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Get default config path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("poseidon")
            .join("filemanager.toml")
    }

    /// Load from a specific TOML file; missing keys keep their defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
