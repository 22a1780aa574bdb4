//! Mark balance: the opener has as many marks as the other side, or one more.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: the opening mark's count equals the other mark's count or
/// exceeds it by exactly one.
pub struct MarkBalanceInvariant;

impl Invariant<GameInProgress> for MarkBalanceInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let first = game.config().first_mark();
        let opener = game.board().count(first);
        let other = game.board().count(first.opponent());
        opener == other || opener == other + 1
    }

    fn description() -> &'static str {
        "Opening mark leads the other by zero or one"
    }
}
