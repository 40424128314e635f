//! Application configuration.
//!
//! Every section has defaults, so a configuration file only needs the values
//! it overrides:
//!
//! ```json
//! { "validation": { "max_title_chars": 120 }, "pomodoro": { "work_minutes": 50 } }
//! ```

use crate::pomodoro::{PomodoroError, PomodoroSettings};
use crate::project::services::DispatcherConfig;
use crate::task::domain::TaskValidationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(Arc<std::io::Error>),

    /// The configuration is not valid JSON for [`AppConfig`].
    #[error("failed to parse configuration: {0}")]
    Parse(Arc<serde_json::Error>),

    /// A limit or capacity is zero.
    #[error("configuration value must be at least 1: {0}")]
    ZeroLimit(&'static str),

    /// The timer settings are invalid.
    #[error(transparent)]
    Pomodoro(#[from] PomodoroError),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Task content limits.
    pub validation: TaskValidationConfig,
    /// Pomodoro timer defaults.
    pub pomodoro: PomodoroSettings,
    /// Persistence queue settings.
    pub dispatcher: DispatcherConfig,
}

impl AppConfig {
    /// Parses and validates configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the errors of
    /// [`Self::validate`] for invalid values.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(Arc::new(err)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and the
    /// errors of [`Self::from_json_str`] otherwise.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw =
            std::fs::read_to_string(path).map_err(|err| ConfigError::Io(Arc::new(err)))?;
        Self::from_json_str(&raw)
    }

    /// Rejects zero limits and invalid timer settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLimit`] or [`ConfigError::Pomodoro`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.validation.max_title_chars == 0 {
            return Err(ConfigError::ZeroLimit("validation.max_title_chars"));
        }
        if self.validation.max_description_chars == 0 {
            return Err(ConfigError::ZeroLimit("validation.max_description_chars"));
        }
        if self.dispatcher.failure_capacity == 0 {
            return Err(ConfigError::ZeroLimit("dispatcher.failure_capacity"));
        }
        self.pomodoro.validate()?;
        Ok(())
    }
}
