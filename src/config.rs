//! Arena configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts::StrategyKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the console arena.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Tracing filter used when neither `RUST_LOG` nor `--log` is set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Base seed for computer players; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Number of matches for `arena` runs.
    #[serde(default = "default_games")]
    games: u32,

    /// Default strategy for the first side in `arena` runs.
    #[serde(default = "default_first")]
    first: StrategyKind,

    /// Default strategy for the second side in `arena` runs.
    #[serde(default = "default_second")]
    second: StrategyKind,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

#[instrument]
fn default_games() -> u32 {
    100
}

#[instrument]
fn default_first() -> StrategyKind {
    StrategyKind::Optimal
}

#[instrument]
fn default_second() -> StrategyKind {
    StrategyKind::Random
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            seed: None,
            games: default_games(),
            first: default_first(),
            second: default_second(),
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(games = config.games, seed = ?config.seed, "Config loaded");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns defaults.
    ///
    /// An explicitly named file that is missing is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.first.is_interactive() || self.second.is_interactive() {
            return Err(ConfigError::new(
                "Arena defaults must be computer strategies, not 'user'".to_string(),
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
