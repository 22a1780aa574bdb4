//! Errors for queries made outside their contract.

use derive_more::{Display, Error};

/// A rules or search query made on a board it does not apply to.
///
/// These are caller bugs, not game events: scoring is only defined for
/// finished boards and searching only for live ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum QueryError {
    /// `score` called on a board where play can continue.
    #[display("Board is not terminal; score is undefined")]
    NotTerminal,

    /// `search` or `best_move` called on a finished board.
    #[display("Board is already terminal; there is no move to search")]
    AlreadyTerminal,
}
