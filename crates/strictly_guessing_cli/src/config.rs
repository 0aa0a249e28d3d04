//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_guessing::Difficulty;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
///
/// Precedence: command-line flags, then the TOML file, then defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuessConfig {
    /// Difficulty for the first round.
    #[serde(default)]
    difficulty: Difficulty,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl GuessConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, difficulty: Option<Difficulty>, log_filter: Option<String>) -> Self {
        if let Some(difficulty) = difficulty {
            debug!(%difficulty, "Overriding difficulty");
            self.difficulty = difficulty;
        }
        if let Some(log_filter) = log_filter {
            debug!(%log_filter, "Overriding log filter");
            self.log_filter = log_filter;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: GuessConfig = toml::from_str("").unwrap();
        assert_eq!(config, GuessConfig::default());
        assert_eq!(*config.difficulty(), Difficulty::Normal);
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_overrides_win() {
        let config = GuessConfig::default().with_overrides(Some(Difficulty::Hard), None);
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(config.log_filter(), "warn");

        let config = config.with_overrides(None, Some("debug".into()));
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        assert!(toml::from_str::<GuessConfig>("difficulty = \"nightmare\"").is_err());
    }
}
