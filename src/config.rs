//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::{Player, ScoringPolicy};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How completed lines are scored.
    scoring: ScoringPolicy,

    /// File the TUI writes its logs to.
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    log_filter: String,

    /// Color name for X marks (anything ratatui parses, e.g. "blue", "#ff8800").
    x_color: String,

    /// Color name for O marks.
    o_color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringPolicy::default(),
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(scoring = %config.scoring, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for this run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used when present and the defaults otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the scoring policy.
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    /// Color used to draw `player`'s marks.
    pub fn player_color(&self, player: Player) -> Color {
        let name = match player {
            Player::X => &self.x_color,
            Player::O => &self.o_color,
        };
        // Validated on load; the fallback only covers hand-built configs.
        name.parse().unwrap_or(Color::White)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [("x_color", &self.x_color), ("o_color", &self.o_color)] {
            value
                .parse::<Color>()
                .map_err(|_| ConfigError::new(format!("Unknown color for {}: '{}'", key, value)))?;
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
