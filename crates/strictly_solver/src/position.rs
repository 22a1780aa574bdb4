//! Named cells of the 3x3 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Variants are declared in row-major order, so the derived ordering
/// matches the board index (`row * 3 + col`, zero-based).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from one-based row and column, as typed by a human.
    ///
    /// Anything outside `[1, 3] x [1, 3]` is rejected.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if !(1..=3).contains(&row) || !(1..=3).contains(&col) {
            return None;
        }
        Self::from_index((row - 1) * 3 + (col - 1))
    }

    /// One-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3 + 1
    }

    /// One-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3 + 1
    }
}

impl TryFrom<isize> for Position {
    type Error = isize;

    /// Signed conversion so callers can pass through unchecked input like `-1`.
    fn try_from(index: isize) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(Self::from_index)
            .ok_or(index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip_matches_declaration_order() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_from_coords_is_one_based() {
        assert_eq!(Position::from_coords(1, 1), Some(Position::TopLeft));
        assert_eq!(Position::from_coords(1, 3), Some(Position::TopRight));
        assert_eq!(Position::from_coords(2, 2), Some(Position::Center));
        assert_eq!(Position::from_coords(3, 2), Some(Position::BottomCenter));
    }

    #[test]
    fn test_from_coords_rejects_out_of_range() {
        assert_eq!(Position::from_coords(0, 1), None);
        assert_eq!(Position::from_coords(1, 0), None);
        assert_eq!(Position::from_coords(4, 1), None);
        assert_eq!(Position::from_coords(2, 4), None);
    }

    #[test]
    fn test_row_col() {
        assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (2, 3));
        assert_eq!((Position::BottomLeft.row(), Position::BottomLeft.col()), (3, 1));
    }

    #[test]
    fn test_try_from_signed() {
        assert_eq!(Position::try_from(4_isize), Ok(Position::Center));
        assert_eq!(Position::try_from(-1_isize), Err(-1));
        assert_eq!(Position::try_from(9_isize), Err(9));
    }
}
