//! Core domain types for the board.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Mark placed on the board.
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
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X.
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// The board is a plain `Copy` value. Search explores hypothetical
/// futures on copies, so a caller's board is never touched by analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from raw squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position without any rule checks.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Mark to move next, given which mark opened the game.
    ///
    /// The opener moves whenever both marks have been played equally often.
    pub fn next_mark(&self, first: Mark) -> Mark {
        if self.count(first) > self.count(first.opponent()) {
            first.opponent()
        } else {
            first
        }
    }

    /// Places `mark` on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] and leaves the board untouched
    /// if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            debug!(?pos, "Rejected placement on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }
        self.set(pos, Square::Occupied(mark));
        Ok(())
    }

    /// Places `mark` at a raw board index.
    ///
    /// The index is signed so unvalidated input can be passed straight
    /// through; anything outside `[0, 9)` is rejected.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] or [`MoveError::SquareOccupied`]; the board
    /// is unchanged in both cases.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: isize, mark: Mark) -> Result<Position, MoveError> {
        let pos = Position::try_from(index).map_err(MoveError::OutOfRange)?;
        self.place(pos, mark)?;
        Ok(pos)
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// The square must be empty.
    pub fn with_move(&self, pos: Position, mark: Mark) -> Self {
        debug_assert!(self.is_empty(pos), "with_move on occupied square {pos:?}");
        let mut next = *self;
        next.set(pos, Square::Occupied(mark));
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Three rows of `X`, `O` or `.`, separated by newlines.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => '.',
                    Square::Occupied(Mark::X) => 'X',
                    Square::Occupied(Mark::O) => 'O',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{symbol}")?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid board: {}", reason)]
pub struct ParseBoardError {
    /// What was wrong with the input.
    pub reason: String,
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells of `X`, `O`, `.`, `_` or `-` (case-insensitive).
    ///
    /// Whitespace, `|` and `/` are ignored so both `"XO_/_X_/__O"` and the
    /// [`Display`](std::fmt::Display) output round-trip.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '_' | '-' => Square::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                other => {
                    return Err(ParseBoardError {
                        reason: format!("unexpected character {other:?}"),
                    });
                }
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares.try_into().map_err(|cells: Vec<Square>| {
            ParseBoardError {
                reason: format!("expected 9 cells, found {}", cells.len()),
            }
        })?;
        Ok(Self { squares })
    }
}
