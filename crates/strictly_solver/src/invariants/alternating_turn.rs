//! Alternating turn invariant: marks alternate starting with the opener.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: marks alternate turns.
///
/// The first move carries the configured opening mark, no mark moves
/// twice in a row, and `to_move` is the mark the history implies.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let first = game.config().first_mark();
        let history = game.history();

        if history.first().is_some_and(|m| m.mark != first) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            first
        } else {
            first.opponent()
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns starting with the opener"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, GameInProgress, GameResult, GameSetup, Mark, Move, Position, Side};

    #[test]
    fn test_empty_game_holds() {
        let game = GameSetup::new(GameConfig::default()).start();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let moves = [
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::O, Position::Center),
            Move::new(Mark::X, Position::TopRight),
            Move::new(Mark::O, Position::BottomLeft),
            Move::new(Mark::X, Position::BottomRight),
        ];

        match GameInProgress::replay(GameConfig::default(), &moves) {
            Ok(GameResult::InProgress(game)) => {
                assert!(AlternatingTurnInvariant::holds(&game));
                assert_eq!(game.to_move(), Mark::O);
            }
            other => panic!("Expected in-progress game, got {other:?}"),
        }
    }

    #[test]
    fn test_engine_opener_holds() {
        let config = GameConfig::default().with_first_mover(Side::Engine);
        let game = GameSetup::new(config).start();
        assert_eq!(game.to_move(), Mark::O);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut game = GameSetup::new(GameConfig::default()).start();
        game.history.push(Move::new(Mark::X, Position::TopLeft));
        game.history.push(Move::new(Mark::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_opener_violates() {
        let mut game = GameSetup::new(GameConfig::default()).start();
        game.history.push(Move::new(Mark::O, Position::Center));
        game.to_move = Mark::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
