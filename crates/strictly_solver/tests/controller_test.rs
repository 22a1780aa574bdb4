//! Tests for the turn controller against the engine.

use strictly_solver::{
    AuditReport, GameConfig, GameInProgress, GameResult, GameSetup, Mark, Move, MoveError,
    Outcome, Position, Pruning, Side, Square, TurnState, audit,
};

fn expect_in_progress(result: GameResult) -> GameInProgress {
    match result {
        GameResult::InProgress(game) => game,
        GameResult::Finished(game) => panic!("Game ended early: {:?}", game.outcome()),
    }
}

#[test]
fn test_engine_never_loses_when_human_opens() {
    let report = audit(GameConfig::default()).expect("audit runs");
    assert!(report.is_unbeaten(), "{report:?}");
    assert_eq!(report.games, report.engine_wins + report.draws);
    assert!(report.draws > 0);
    assert!(report.engine_wins > 0);
}

#[test]
fn test_engine_never_loses_when_engine_opens() {
    let config = GameConfig::default().with_first_mover(Side::Engine);
    let report = audit(config).expect("audit runs");
    assert!(report.is_unbeaten(), "{report:?}");
}

#[test]
fn test_engine_never_loses_playing_x() {
    let config = GameConfig::new(Mark::X, Side::Human, Pruning::AlphaBeta);
    let report = audit(config).expect("audit runs");
    assert!(report.is_unbeaten(), "{report:?}");
}

#[test]
fn test_audit_is_independent_of_pruning() {
    let pruned = audit(GameConfig::default()).unwrap();
    let plain = audit(GameConfig::default().with_pruning(Pruning::Off)).unwrap();
    assert_eq!(pruned, plain);
    assert_ne!(pruned, AuditReport::default());
}

#[test]
fn test_turns_alternate_between_human_and_engine() {
    let game = GameSetup::new(GameConfig::default()).start();
    assert_eq!(game.state(), TurnState::HumanTurn);

    let game = expect_in_progress(game.play_human(Position::TopLeft).unwrap());
    assert_eq!(game.state(), TurnState::EngineTurn);

    let reply = game.play_engine().unwrap();
    assert_eq!(reply.next.state(), TurnState::HumanTurn);
    assert_eq!(reply.next.board().occupied(), 2);
}

#[test]
fn test_illegal_human_move_leaves_game_intact() {
    let game = GameSetup::new(GameConfig::default()).start();
    let game = expect_in_progress(game.play_human(Position::Center).unwrap());
    let game = expect_in_progress(game.play_engine().unwrap().next);

    let board_before = *game.board();
    let occupied = Move::new(Mark::X, Position::Center);
    assert_eq!(
        game.check(&occupied),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(*game.board(), board_before);
    assert_eq!(game.history().len(), 2);

    // The same game still accepts a legal move afterwards.
    let free = game.valid_moves()[0];
    assert!(game.play_human(free).is_ok());
}

#[test]
fn test_engine_converts_human_blunder() {
    // Human: corner, then an edge that ignores the engine's threat.
    let game = GameSetup::new(GameConfig::default()).start();
    let game = expect_in_progress(game.play_human(Position::TopLeft).unwrap());
    let game = expect_in_progress(game.play_engine().unwrap().next);
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Mark::O));

    let game = expect_in_progress(game.play_human(Position::BottomRight).unwrap());
    let game = expect_in_progress(game.play_engine().unwrap().next);
    // Engine must take an edge here; a corner loses to the double threat.
    let engine_edge = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ]
    .into_iter()
    .find(|p| game.board().get(*p) == Square::Occupied(Mark::O))
    .expect("engine answered on an edge");

    // Human ignores the threat through the center.
    let opposite = Position::from_index(8 - engine_edge.to_index()).unwrap();
    let ignore = game
        .valid_moves()
        .into_iter()
        .find(|p| *p != opposite)
        .unwrap();
    let game = expect_in_progress(game.play_human(ignore).unwrap());
    let reply = game.play_engine().unwrap();
    assert_eq!(reply.search.value, 1, "engine sees the forced win");

    // Play it out; the engine converts.
    let mut state = reply.next;
    loop {
        state = match state {
            GameResult::Finished(done) => {
                assert_eq!(done.outcome(), Outcome::EngineWin);
                break;
            }
            GameResult::InProgress(game) => match game.side_to_move() {
                Side::Human => {
                    let first_free = game.valid_moves()[0];
                    game.play_human(first_free).unwrap()
                }
                Side::Engine => game.play_engine().unwrap().next,
            },
        };
    }
}

#[test]
fn test_finished_game_restarts_with_same_config() {
    let config = GameConfig::default().with_first_mover(Side::Engine);
    let moves = [
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::TopCenter),
        Move::new(Mark::O, Position::TopLeft),
        Move::new(Mark::X, Position::BottomRight),
        Move::new(Mark::O, Position::TopRight),
        Move::new(Mark::X, Position::BottomCenter),
        Move::new(Mark::O, Position::BottomLeft),
    ];

    let GameResult::Finished(done) = GameInProgress::replay(config, &moves).unwrap() else {
        panic!("O completes the anti-diagonal");
    };
    assert_eq!(done.outcome(), Outcome::EngineWin);
    assert_eq!(done.history().len(), 7);

    let fresh = done.restart().start();
    assert_eq!(fresh.state(), TurnState::EngineTurn);
    assert!(fresh.history().is_empty());
}

#[test]
fn test_human_win_is_reported() {
    // Engine plays O but only through replay, so the human can win.
    let moves = [
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::MiddleLeft),
        Move::new(Mark::X, Position::TopCenter),
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::TopRight),
    ];
    let result = GameInProgress::replay(GameConfig::default(), &moves).unwrap();
    assert_eq!(result.state(), TurnState::Finished(Outcome::HumanWin));
}

#[test]
fn test_draw_is_reported() {
    let moves = [
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::TopRight),
        Move::new(Mark::O, Position::TopCenter),
        Move::new(Mark::X, Position::BottomCenter),
        Move::new(Mark::O, Position::MiddleLeft),
        Move::new(Mark::X, Position::MiddleRight),
        Move::new(Mark::O, Position::BottomRight),
        Move::new(Mark::X, Position::BottomLeft),
    ];
    let result = GameInProgress::replay(GameConfig::default(), &moves).unwrap();
    assert_eq!(result.state(), TurnState::Finished(Outcome::Draw));
}
