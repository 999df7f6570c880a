//! Configuration loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::SortOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "rewind.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RewindConfig {
    /// Move list preferences.
    #[serde(default)]
    history: HistorySettings,

    /// Log output preferences.
    #[serde(default)]
    logging: LoggingSettings,
}

/// Move list preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Initial order of the move list.
    #[serde(default)]
    order: SortOrder,
}

/// Log output preferences.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file written by the terminal UI.
    #[serde(default = "default_log_file")]
    file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    filter: String,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

#[instrument]
fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            filter: default_filter(),
        }
    }
}

impl RewindConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(order = ?config.history.order, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the configuration to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// `dir` is used when present and defaults otherwise.
    #[instrument(skip(explicit, dir))]
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::from_file(fallback)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Forces descending order when `descending` is set, keeping the file's
    /// choice otherwise.
    #[instrument(skip(self))]
    pub fn with_descending(mut self, descending: bool) -> Self {
        if descending {
            self.history.order = SortOrder::Descending;
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
    fn test_empty_toml_uses_defaults() {
        let config = RewindConfig::from_toml("").unwrap();
        assert_eq!(config, RewindConfig::default());
        assert_eq!(config.history().order(), &SortOrder::Ascending);
        assert_eq!(config.logging().filter(), "info");
    }

    #[test]
    fn test_descending_flag_overrides_file() {
        let config = RewindConfig::default().with_descending(true);
        assert_eq!(config.history().order(), &SortOrder::Descending);

        let config = RewindConfig::from_toml("[history]\norder = \"descending\"")
            .unwrap()
            .with_descending(false);
        assert_eq!(config.history().order(), &SortOrder::Descending);
    }

    #[test]
    fn test_unknown_order_is_an_error() {
        let err = RewindConfig::from_toml("[history]\norder = \"sideways\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
