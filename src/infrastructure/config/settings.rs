//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Every section is optional; a missing file section falls back to its
//! defaults. The cache path can be overridden with `PAIRKEEPER_CACHE_PATH`.
//!
//! # Example
//!
//! ```no_run
//! use pairkeeper::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use super::assets::AssetsConfig;
use super::cache::{CacheConfig, CACHE_PATH_ENV};
use super::logging::LoggingConfig;
use super::referral::ReferralConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Pair cache location.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Default pair and priority ranking.
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Referral link settings.
    #[serde(default)]
    pub referral: ReferralConfig,
}

impl Config {
    /// Parse configuration from TOML content and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be loaded.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(path) = std::env::var(CACHE_PATH_ENV) {
            if !path.trim().is_empty() {
                self.cache.path = PathBuf::from(path);
            }
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.cache.key.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "cache.key" }.into());
        }
        if self.cache.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "cache.path" }.into());
        }

        self.assets.validate()?;

        if self.referral.native_alias.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "native_alias",
            }
            .into());
        }
        match Url::parse(&self.referral.base_url) {
            Ok(url) if url.cannot_be_a_base() => {
                return Err(ConfigError::InvalidValue {
                    field: "base_url",
                    reason: "must be a hierarchical URL".to_string(),
                }
                .into());
            }
            Ok(_) => {}
            Err(e) => {
                return Err(ConfigError::InvalidValue {
                    field: "base_url",
                    reason: e.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
