//! Command-line interface for strictly_solver.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_solver::{ConfigError, GameConfig, Mark, Pruning, Side};
use tracing::{debug, instrument};

/// Strictly Solver - Unbeatable tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "strictly_solver")]
#[command(about = "Play or analyze tic-tac-toe against a perfect minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game against the engine
    Play {
        /// Engine settings
        #[command(flatten)]
        engine: EngineArgs,

        /// Let the engine make the first move
        #[arg(long)]
        engine_first: bool,
    },

    /// Search a single position and report its value and best move
    Analyze {
        /// Board as nine cells of X, O or . (e.g. "XOX/XO./..O")
        board: String,

        /// Mark to move; must agree with the mark counts, inferred if omitted
        #[arg(long)]
        to_move: Option<Mark>,

        /// Engine settings
        #[command(flatten)]
        engine: EngineArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play the engine against every possible human line and tally outcomes
    Audit {
        /// Engine settings
        #[command(flatten)]
        engine: EngineArgs,

        /// Let the engine make the first move
        #[arg(long)]
        engine_first: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Engine settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Path to a TOML game config; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mark played by the engine (x or o)
    #[arg(long)]
    pub engine_mark: Option<Mark>,

    /// Search the full tree without alpha-beta cutoffs
    #[arg(long)]
    pub no_pruning: bool,
}

impl EngineArgs {
    /// Builds the game configuration: defaults, then the config file,
    /// then command-line flags.
    #[instrument(skip(self))]
    pub fn resolve(&self, engine_first: bool) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(mark) = self.engine_mark {
            config = config.with_engine_mark(mark);
        }
        if engine_first {
            config = config.with_first_mover(Side::Engine);
        }
        if self.no_pruning {
            config = config.with_pruning(Pruning::Off);
        }

        debug!(?config, "Resolved game config");
        Ok(config)
    }
}
