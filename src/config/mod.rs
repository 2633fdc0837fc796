//! Application configuration loading and validation.
//!
//! Configuration is read from a TOML file. Every section and field is
//! optional; anything left out takes its default.

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

use rust_decimal::Decimal;

use crate::domain::NO_VIG_SAMPLE;
use crate::error::{ConfigError, Result};

mod defaults;
mod logging;

pub use defaults::DefaultsConfig;
pub use logging::{LoggingConfig, LOG_FORMATS};

/// Path used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "oddsmath.toml";

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Parse and validate configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
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
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Like [`Config::load`], but a file that does not exist yields the
    /// defaults. Any other read failure is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::ReadFile(e).into()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!(
                    "expected one of {}, got '{}'",
                    LOG_FORMATS.join(", "),
                    self.logging.format
                ),
            }
            .into());
        }
        if self.defaults.bankroll <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "bankroll",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.defaults.no_vig_sample < NO_VIG_SAMPLE {
            return Err(ConfigError::InvalidValue {
                field: "no_vig_sample",
                reason: format!("must be at least {NO_VIG_SAMPLE}"),
            }
            .into());
        }
        if self.defaults.sharp_book.as_str().trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "sharp_book",
            }
            .into());
        }
        Ok(())
    }
}
