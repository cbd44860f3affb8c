//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional and
//! falls back to its defaults.
//!
//! # Example
//!
//! ```no_run
//! use edgematch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::export::ExportConfig;
use super::logging::LoggingConfig;
use super::source::{SourceConfig, SourceKind};
use super::unify::UnifyConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Clustering threshold and confidence bonus.
    #[serde(default)]
    pub unify: UnifyConfig,

    /// Where listings come from.
    #[serde(default)]
    pub source: SourceConfig,

    /// Where and how reports are written.
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
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

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are present and values are within
    /// acceptable ranges. Call again after applying CLI overrides.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.unify.threshold) {
            return Err(ConfigError::InvalidValue {
                field: "threshold",
                reason: "must be between 0 and 1".to_string(),
            }
            .into());
        }
        if !(0.0..=1.0).contains(&self.unify.confidence_bonus) {
            return Err(ConfigError::InvalidValue {
                field: "confidence_bonus",
                reason: "must be between 0 and 1".to_string(),
            }
            .into());
        }

        match self.source.kind {
            SourceKind::Sample => {}
            SourceKind::File => {
                if self.source.path.as_deref().map_or(true, str::is_empty) {
                    return Err(ConfigError::MissingField {
                        field: "source.path",
                    }
                    .into());
                }
            }
            SourceKind::Http => {
                let Some(url) = self.source.url.as_deref().filter(|u| !u.is_empty()) else {
                    return Err(ConfigError::MissingField { field: "source.url" }.into());
                };
                if let Err(e) = url::Url::parse(url) {
                    return Err(ConfigError::InvalidValue {
                        field: "source.url",
                        reason: e.to_string(),
                    }
                    .into());
                }
            }
        }
        if self.source.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.source.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.export.dir.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "export.dir" }.into());
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "format",
                    reason: format!("expected \"pretty\" or \"json\", got \"{other}\""),
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
