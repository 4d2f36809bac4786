//! Configuration loading with an explicit fall-back-to-defaults policy.
//!
//! The configuration is loaded once at startup and handed to the HTTP layer
//! as a value; there is no lazily populated process-wide cache.

use crate::schema::SiteConfig;
use eris_common::ErisError;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable naming the configuration file to load.
pub const CONFIG_PATH_ENV: &str = "SITECONFIG_PATH";

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "siteconfig.json";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading the configuration file.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("Failed to parse JSON configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration failed validation.
    #[error("Configuration validation failed: {0}")]
    Invalid(String),
}

impl From<ConfigError> for ErisError {
    fn from(err: ConfigError) -> Self {
        Self::config(err)
    }
}

/// Configuration loader for the site.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates configuration from a specific file.
    ///
    /// A partial document merges over the built-in defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SiteConfig, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_json::from_str(&content)?;
        config
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(config)
    }

    /// Loads configuration from the conventional locations.
    ///
    /// Checks the `SITECONFIG_PATH` environment variable first, then
    /// `siteconfig.json` in the working directory. Any failure, including
    /// the file simply not existing, falls back to the built-in defaults
    /// with a warning; startup never fails on configuration.
    pub fn load() -> SiteConfig {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Self::load_or_default(&path);
        }

        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::load_or_default(DEFAULT_CONFIG_FILE);
        }

        debug!("no site configuration file found, using defaults");
        SiteConfig::default()
    }

    /// Loads from a path, falling back to the defaults on any failure.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> SiteConfig {
        match Self::load_from_file(path.as_ref()) {
            Ok(config) => {
                debug!(path = %path.as_ref().display(), "loaded site configuration");
                config
            }
            Err(e) => {
                warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "failed to load site configuration, using defaults"
                );
                SiteConfig::default()
            }
        }
    }
}
