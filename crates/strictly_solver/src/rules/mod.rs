//! Game rules for tic-tac-toe.
//!
//! Pure functions over a borrowed [`Board`](super::Board). Rules are kept
//! apart from board storage so the search, the contracts and the turn
//! controller all share one definition of a finished game.

pub mod draw;
pub mod terminal;
pub mod win;

pub use draw::{available_moves, is_draw, is_full};
pub use terminal::{is_terminal, score};
pub use win::{LINES, winner};
