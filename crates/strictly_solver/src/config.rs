//! Game configuration: which mark the engine plays, who opens, and
//! whether the search prunes.
//!
//! Configuration is an explicit value handed to the turn controller and
//! the searcher at construction. It loads from TOML:
//!
//! ```toml
//! engine_mark = "O"
//! first_mover = "human"
//! pruning = "alpha_beta"
//! ```

use super::board::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One of the two participants in a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    /// The human (or any external move provider).
    Human,
    /// The search engine.
    Engine,
}

/// Whether the search cuts branches with alpha-beta bounds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Pruning {
    /// Plain minimax over the full tree.
    Off,
    /// Minimax with alpha-beta cutoffs.
    AlphaBeta,
}

/// Configuration for a game against the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// Mark played by the engine. The human plays the other one.
    engine_mark: Mark,

    /// Side that moves first.
    first_mover: Side,

    /// Search pruning mode.
    pruning: Pruning,
}

impl Default for GameConfig {
    /// Human plays X and opens; engine plays O with alpha-beta on.
    fn default() -> Self {
        Self {
            engine_mark: Mark::O,
            first_mover: Side::Human,
            pruning: Pruning::AlphaBeta,
        }
    }
}

impl GameConfig {
    /// Creates a new configuration.
    #[instrument]
    pub fn new(engine_mark: Mark, first_mover: Side, pruning: Pruning) -> Self {
        Self {
            engine_mark,
            first_mover,
            pruning,
        }
    }

    /// Mark played by the human.
    pub fn human_mark(&self) -> Mark {
        self.engine_mark.opponent()
    }

    /// Mark played by `side`.
    pub fn mark_for(&self, side: Side) -> Mark {
        match side {
            Side::Engine => self.engine_mark,
            Side::Human => self.human_mark(),
        }
    }

    /// Side playing `mark`.
    pub fn side_for(&self, mark: Mark) -> Side {
        if mark == self.engine_mark {
            Side::Engine
        } else {
            Side::Human
        }
    }

    /// Mark that opens the game.
    pub fn first_mark(&self) -> Mark {
        self.mark_for(self.first_mover)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Parsed game config");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            engine_mark = %config.engine_mark,
            first_mover = %config.first_mover,
            pruning = %config.pruning,
            "Config loaded successfully"
        );
        Ok(config)
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
