//! Move ordering: center, then corners, then edges.
//!
//! Ordering never changes the value minimax computes. It decides which
//! branches alpha-beta can cut early, and because the search keeps the
//! first move among equals, it is also the tie-break between moves of
//! the same value.

use super::{Board, Position};
use tracing::instrument;

/// The center square.
pub const CENTER: Position = Position::Center;

/// Corners in visiting order.
pub const CORNERS: [Position; 4] = [
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
];

/// Edges in visiting order.
pub const EDGES: [Position; 4] = [
    Position::TopCenter,
    Position::MiddleLeft,
    Position::MiddleRight,
    Position::BottomCenter,
];

/// Empty squares in search order: center, corners, edges.
#[instrument(level = "trace")]
pub fn move_order(board: &Board) -> Vec<Position> {
    std::iter::once(CENTER)
        .chain(CORNERS)
        .chain(EDGES)
        .filter(|pos| board.is_empty(*pos))
        .collect()
}
