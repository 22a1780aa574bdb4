//! Terminal detection and scoring from the engine's point of view.

use super::super::error::QueryError;
use super::super::{Board, Mark};
use super::draw::is_full;
use super::win::winner;
use tracing::{instrument, warn};

/// True iff someone has won or no empty squares remain.
#[instrument(level = "trace")]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a finished board for the engine playing `engine`.
///
/// +1 engine won, -1 opponent won, 0 draw.
///
/// # Errors
///
/// [`QueryError::NotTerminal`] if the game on `board` is still live.
#[instrument(level = "trace")]
pub fn score(board: &Board, engine: Mark) -> Result<i32, QueryError> {
    if !is_terminal(board) {
        warn!(%board, "score requested for a live board");
        return Err(QueryError::NotTerminal);
    }
    Ok(terminal_value(board, engine))
}

/// Value of a board already known to be terminal.
pub(crate) fn terminal_value(board: &Board, engine: Mark) -> i32 {
    match winner(board) {
        Some(mark) if mark == engine => 1,
        Some(_) => -1,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_on_win_and_full() {
        assert!(!is_terminal(&Board::new()));
        assert!(is_terminal(&"OOO/XX./X..".parse().unwrap()));
        assert!(is_terminal(&"XOX/OXX/OXO".parse().unwrap()));
    }

    #[test]
    fn test_score_signs() {
        let o_wins: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(score(&o_wins, Mark::O), Ok(1));
        assert_eq!(score(&o_wins, Mark::X), Ok(-1));

        let draw: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(score(&draw, Mark::O), Ok(0));
    }

    #[test]
    fn test_score_live_board_is_error() {
        let board: Board = "X../.O./...".parse().unwrap();
        assert_eq!(score(&board, Mark::O), Err(QueryError::NotTerminal));
    }

    #[test]
    fn test_queries_are_pure() {
        let board: Board = "XOX/XO./..O".parse().unwrap();
        let before = board;
        for _ in 0..3 {
            assert_eq!(winner(&board), None);
            assert!(!is_terminal(&board));
        }
        assert_eq!(board, before);
    }
}
