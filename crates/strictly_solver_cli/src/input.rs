//! Parsing of typed move coordinates.
//!
//! Rows and columns are 1-based. Accepted forms are `"r c"`, `"r,c"` and
//! the two-digit shorthand `"rc"`.

use strictly_solver::Position;
use tracing::{instrument, trace};

/// Parses a typed move into a board position.
///
/// Returns `None` for anything unparsable or outside `1..=3`.
#[instrument]
pub fn parse_move(raw: &str) -> Option<Position> {
    let text = raw.trim().replace(',', " ");
    let parts: Vec<&str> = text
        .split_whitespace()
        .filter(|part| part.chars().all(|c| c.is_ascii_digit()))
        .collect();

    let (row, col) = if parts.len() == 2 {
        (parts[0].parse().ok()?, parts[1].parse().ok()?)
    } else if text.len() == 2 && text.chars().all(|c| c.is_ascii_digit()) {
        let mut digits = text.chars().filter_map(|c| c.to_digit(10));
        (digits.next()? as usize, digits.next()? as usize)
    } else {
        trace!("Unrecognized move format");
        return None;
    };

    Position::from_coords(row, col)
}
