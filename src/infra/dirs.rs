//! Platform-specific directory management
//!
//! Locates the user configuration directory. Follows the XDG Base Directory
//! Specification on Linux and standard locations on macOS and Windows.
//!
//! The `UT2U_CONFIG_DIR` environment variable overrides the default.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the config directory
pub const ENV_CONFIG_DIR: &str = "UT2U_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "ut2u";

/// Global config file name
const CONFIG_FILE: &str = "config.toml";

/// Platform-specific directory provider for ut2u
#[derive(Debug, Clone)]
pub struct Ut2uDirs {
    config_dir: PathBuf,
}

impl Ut2uDirs {
    /// Resolve directories from the environment, then platform defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Use an explicit config directory
    #[must_use]
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/ut2u` or `~/.config/ut2u`
    /// - macOS: `~/Library/Application Support/ut2u`
    /// - Windows: `%APPDATA%\ut2u`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the global config file path
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for Ut2uDirs {
    fn default() -> Self {
        Self::new()
    }
}
