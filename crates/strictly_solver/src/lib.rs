//! Strictly Solver - a perfect-play tic-tac-toe engine
//!
//! Exhaustive minimax search (optionally alpha-beta pruned) over the 3x3
//! board, plus the rules and the turn controller it plugs into.
//!
//! # Architecture
//!
//! - **Board**: `Copy` grid of nine [`Square`]s, named by [`Position`]
//! - **Rules**: [`winner`], [`available_moves`], [`is_terminal`], [`score`]
//! - **Ordering**: [`move_order`] visits center, corners, then edges
//! - **Search**: [`Searcher`] runs minimax with optional alpha-beta
//! - **Controller**: [`GameSetup`] → [`GameInProgress`] → [`GameFinished`],
//!   with moves checked by contracts and invariants
//!
//! # Example
//!
//! ```
//! use strictly_solver::{GameConfig, GameResult, GameSetup, Position, TurnState};
//!
//! let game = GameSetup::new(GameConfig::default()).start();
//! assert_eq!(game.state(), TurnState::HumanTurn);
//!
//! let GameResult::InProgress(game) = game.play_human(Position::TopLeft)? else {
//!     unreachable!("one move cannot end the game");
//! };
//! let reply = game.play_engine()?;
//! assert_eq!(reply.position, Position::Center);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod audit;
mod board;
mod config;
mod contracts;
mod error;
mod invariants;
mod ordering;
mod phases;
mod position;
mod rules;
mod search;
mod typestate;

// Crate-level exports - Board and positions
pub use board::{Board, Mark, ParseBoardError, Square};
pub use position::Position;

// Crate-level exports - Rules
pub use rules::{LINES, available_moves, is_draw, is_full, is_terminal, score, winner};

// Crate-level exports - Search
pub use ordering::{CENTER, CORNERS, EDGES, move_order};
pub use search::{INFINITY, MAX_PLIES, SearchResult, SearchStats, Searcher};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, Pruning, Side};

// Crate-level exports - Moves and errors
pub use action::{Move, MoveError};
pub use error::QueryError;

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, LegalMove, MarksTurn, MoveContract, SquareIsEmpty};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MarkBalanceInvariant, MonotonicBoardInvariant,
};

// Crate-level exports - Turn controller
pub use phases::{Outcome, TurnState};
pub use typestate::{EngineError, EngineReply, GameFinished, GameInProgress, GameResult, GameSetup};

// Crate-level exports - Audit
pub use audit::{AuditReport, audit};
