//! Global configuration management
//!
//! Reads user settings from `config.toml` in the config directory. Settings
//! cover the build defaults: the stock packages placed ahead of everything
//! else in `EditPackages`, and dependencies added to every build.
//!
//! ```toml
//! [build]
//! base_packages = ["Core", "Engine", "Editor"]
//! dependencies = ["SharedLib"]
//! ```

use crate::config::defaults::base_edit_packages;
use crate::infra::dirs::Ut2uDirs;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Global configuration error types
#[derive(Error, Debug)]
pub enum GlobalConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Global configuration for ut2u
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GlobalConfig {
    /// Default build options
    #[serde(default)]
    pub build: BuildConfig,
}

/// Default build options
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BuildConfig {
    /// Replacement for the stock UT2004 package list
    pub base_packages: Option<Vec<String>>,

    /// Dependencies added to every build, ahead of command-line ones
    pub dependencies: Option<Vec<String>>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns `GlobalConfigError::ParseError` if the config file exists but
    /// contains invalid TOML.
    pub fn load(dirs: &Ut2uDirs) -> Result<Self, GlobalConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, GlobalConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| GlobalConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Effective base package list
    ///
    /// Returns the configured list if set, otherwise the stock UT2004 list.
    #[must_use]
    pub fn base_packages(&self) -> Vec<String> {
        self.build
            .base_packages
            .clone()
            .unwrap_or_else(base_edit_packages)
    }

    /// Dependencies configured for every build
    #[must_use]
    pub fn dependencies(&self) -> &[String] {
        self.build.dependencies.as_deref().unwrap_or_default()
    }
}
