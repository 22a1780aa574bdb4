//! Turn states and outcomes seen by the game loop.

use super::config::{GameConfig, Side};
use super::rules::{is_full, winner};
use super::Board;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game, from the human's seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The human completed a line.
    HumanWin,
    /// The engine completed a line.
    EngineWin,
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Reads the outcome off a board, or `None` while play can continue.
    pub fn from_board(board: &Board, config: &GameConfig) -> Option<Self> {
        match winner(board) {
            Some(mark) => Some(match config.side_for(mark) {
                Side::Human => Outcome::HumanWin,
                Side::Engine => Outcome::EngineWin,
            }),
            None if is_full(board) => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Returns the winning side if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::HumanWin => Some(Side::Human),
            Outcome::EngineWin => Some(Side::Engine),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::HumanWin => write!(f, "You win"),
            Outcome::EngineWin => write!(f, "Engine wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the game loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting on the human's move.
    HumanTurn,
    /// Waiting on the engine's move.
    EngineTurn,
    /// Game over.
    Finished(Outcome),
}

impl TurnState {
    /// The state in which `side` is to move.
    pub fn to_move(side: Side) -> Self {
        match side {
            Side::Human => TurnState::HumanTurn,
            Side::Engine => TurnState::EngineTurn,
        }
    }
}
