//! Exhaustive audit of the engine against every line a human can play.
//!
//! Walks the full tree of human replies, letting the engine answer each
//! one through the turn controller, and tallies how every game ends. An
//! engine playing perfect minimax never shows a human win.

use super::config::{GameConfig, Side};
use super::phases::Outcome;
use super::typestate::{EngineError, GameResult, GameSetup};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Games played to the end.
    pub games: u64,
    /// Games the engine won.
    pub engine_wins: u64,
    /// Drawn games.
    pub draws: u64,
    /// Games the human won. Zero for a sound engine.
    pub human_wins: u64,
}

impl AuditReport {
    /// True if no line of play beat the engine.
    pub fn is_unbeaten(&self) -> bool {
        self.human_wins == 0
    }

    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome.winner() {
            Some(Side::Engine) => self.engine_wins += 1,
            Some(Side::Human) => self.human_wins += 1,
            None => self.draws += 1,
        }
    }
}

/// Plays every human line against the engine under `config`.
#[instrument]
pub fn audit(config: GameConfig) -> Result<AuditReport, EngineError> {
    let mut report = AuditReport::default();
    explore(GameResult::InProgress(GameSetup::new(config).start()), &mut report)?;
    info!(
        games = report.games,
        engine_wins = report.engine_wins,
        draws = report.draws,
        human_wins = report.human_wins,
        "Audit complete"
    );
    Ok(report)
}

fn explore(state: GameResult, report: &mut AuditReport) -> Result<(), EngineError> {
    match state {
        GameResult::Finished(game) => {
            report.record(game.outcome());
            Ok(())
        }
        GameResult::InProgress(game) => match game.side_to_move() {
            Side::Engine => explore(game.play_engine()?.next, report),
            Side::Human => {
                for position in game.valid_moves() {
                    explore(game.clone().play_human(position)?, report)?;
                }
                Ok(())
            }
        },
    }
}
