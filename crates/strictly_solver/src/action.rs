//! First-class move type and the errors raised when a move is refused.

use super::board::Mark;
use super::config::Side;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a mark placed at a position.
///
/// Moves are validated against the game's contracts before they are
/// applied, and the in-memory history of a game is a list of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Returns the mark of this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Error raised when a move is illegal.
///
/// A refused move never partially applies: the board is exactly as it
/// was before the attempt.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside `[0, 9)`.
    #[display("Index {} is off the board (must be 0-8)", _0)]
    OutOfRange(isize),

    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The move carries the wrong mark for this turn.
    #[display("Expected {} to move, got {}", expected, got)]
    WrongMark {
        /// Mark whose turn it is.
        expected: Mark,
        /// Mark that was played.
        got: Mark,
    },

    /// The side asked to move is not the side to move.
    #[display("It's not the {}'s turn", _0)]
    WrongTurn(Side),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
