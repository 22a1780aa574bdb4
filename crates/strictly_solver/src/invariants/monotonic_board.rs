//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameInProgress};
use super::Invariant;

/// Invariant: replaying the history onto an empty board, never
/// overwriting a square, reproduces the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.place(mov.position, mov.mark).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
