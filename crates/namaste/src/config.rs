//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// Games per series.
    #[serde(default = "default_best_of")]
    best_of: u32,

    /// Show the splash screen on launch.
    #[serde(default = "default_true")]
    splash: bool,

    /// How long the splash screen stays up.
    #[serde(default = "default_splash_millis")]
    splash_millis: u64,

    /// Float emoji after a win.
    #[serde(default = "default_true")]
    celebration: bool,

    /// Where tracing output goes (the terminal belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_best_of() -> u32 {
    namaste_tictactoe::series::DEFAULT_MAX_GAMES
}

fn default_true() -> bool {
    true
}

fn default_splash_millis() -> u64 {
    3000
}

fn default_log_file() -> PathBuf {
    PathBuf::from("namaste.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            best_of: default_best_of(),
            splash: default_true(),
            splash_millis: default_splash_millis(),
            celebration: default_true(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(best_of = config.best_of, "Config loaded successfully");
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

    /// Rejects settings the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.best_of == 0 {
            return Err(ConfigError::new(
                "best_of must be at least 1".to_string(),
            ));
        }
        Ok(())
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
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(*config.best_of(), 5);
        assert!(*config.splash());
        assert_eq!(*config.splash_millis(), 3000);
        assert!(*config.celebration());
        assert_eq!(config.log_file(), &PathBuf::from("namaste.log"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "best_of = 3\nsplash = false").expect("write config");

        let config = AppConfig::from_file(file.path()).expect("valid config");
        assert_eq!(*config.best_of(), 3);
        assert!(!*config.splash());
        assert!(*config.celebration());
    }

    #[test]
    fn test_zero_best_of_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "best_of = 0").expect("write config");

        let err = AppConfig::from_file(file.path()).expect_err("zero games");
        assert!(err.message.contains("best_of"));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "best_of = \"five\"").expect("write config");

        let err = AppConfig::from_file(file.path()).expect_err("wrong type");
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = AppConfig::load(dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_setters_override() {
        let config = AppConfig::default().with_best_of(7).with_splash(false);
        assert_eq!(*config.best_of(), 7);
        assert!(!*config.splash());
    }
}
