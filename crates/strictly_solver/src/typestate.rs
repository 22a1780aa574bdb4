//! Turn controller: phase-specific typestate structs for a game against
//! the engine.
//!
//! Each phase is its own type. A `GameFinished` ALWAYS has an outcome,
//! and only a `GameInProgress` accepts moves. The controller owns the
//! live board; the engine's search only ever borrows it between turns.

use super::action::{Move, MoveError};
use super::config::{GameConfig, Side};
use super::contracts::{Contract, MoveContract};
use super::error::QueryError;
use super::phases::{Outcome, TurnState};
use super::rules::available_moves;
use super::search::{INFINITY, SearchResult, Searcher};
use super::{Board, Mark, Position, Square};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
///
/// The board is always empty.
#[derive(Debug, Clone)]
pub struct GameSetup {
    config: GameConfig,
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with the configured opener to move.
    #[instrument(skip(self), fields(first_mover = %self.config.first_mover()))]
    pub fn start(self) -> GameInProgress {
        let to_move = self.config.first_mark();
        GameInProgress {
            config: self.config,
            board: self.board,
            history: Vec::new(),
            to_move,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Mark,
}

impl GameInProgress {
    /// Checks whether `action` would be accepted, without applying it.
    ///
    /// Lets a caller re-prompt on a bad move while keeping the game.
    pub fn check(&self, action: &Move) -> Result<(), MoveError> {
        MoveContract::pre(self, action)
    }

    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Preconditions are always checked; postconditions in debug builds
    /// only. A refused move changes nothing.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board.set(action.position, Square::Occupied(action.mark));
        game.history.push(action);
        debug!(%action, "Move applied");

        if let Some(outcome) = Outcome::from_board(&game.board, &game.config) {
            info!(%outcome, moves = game.history.len(), "Game finished");
            return Ok(GameResult::Finished(GameFinished {
                config: game.config,
                board: game.board,
                history: game.history,
                outcome,
            }));
        }

        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        Ok(GameResult::InProgress(game))
    }

    /// Plays the human's mark at `position`.
    ///
    /// # Errors
    ///
    /// [`MoveError::WrongTurn`] if the engine is to move, or any
    /// precondition failure from [`make_move`](Self::make_move).
    #[instrument(skip(self))]
    pub fn play_human(self, position: Position) -> Result<GameResult, MoveError> {
        if self.side_to_move() != Side::Human {
            return Err(MoveError::WrongTurn(Side::Human));
        }
        let mark = self.to_move;
        self.make_move(Move::new(mark, position))
    }

    /// Asks the engine for its move and plays it.
    #[instrument(skip(self))]
    pub fn play_engine(self) -> Result<EngineReply, EngineError> {
        if self.side_to_move() != Side::Engine {
            return Err(MoveError::WrongTurn(Side::Engine).into());
        }

        let mut searcher = Searcher::from_config(&self.config);
        let search = searcher.search(&self.board, true, -INFINITY, INFINITY)?;
        let position = search.best_move.ok_or(QueryError::AlreadyTerminal)?;
        info!(%position, value = search.value, nodes = search.stats.nodes, "Engine chose move");

        let mark = self.to_move;
        let next = self.make_move(Move::new(mark, position))?;
        Ok(EngineReply {
            position,
            search,
            next,
        })
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Side {
        self.config.side_for(self.to_move)
    }

    /// Returns the consumer-facing turn state.
    pub fn state(&self) -> TurnState {
        TurnState::to_move(self.side_to_move())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns legal positions in index order.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        available_moves(&self.board)
    }

    /// Replays moves from a fresh game.
    ///
    /// # Errors
    ///
    /// Any refused move, or [`MoveError::GameOver`] if moves remain after
    /// the game has finished.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(config: GameConfig, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut result = GameResult::InProgress(GameSetup::new(config).start());

        for action in moves {
            result = match result {
                GameResult::InProgress(game) => game.make_move(*action)?,
                GameResult::Finished(_) => return Err(MoveError::GameOver),
            };
        }

        Ok(result)
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    config: GameConfig,
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts with the same configuration.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new(self.config)
    }
}

// ─────────────────────────────────────────────────────────────
//  Transitions
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Returns the consumer-facing turn state.
    pub fn state(&self) -> TurnState {
        match self {
            GameResult::InProgress(game) => game.state(),
            GameResult::Finished(game) => TurnState::Finished(game.outcome()),
        }
    }

    /// Returns the board in either phase.
    pub fn board(&self) -> &Board {
        match self {
            GameResult::InProgress(game) => game.board(),
            GameResult::Finished(game) => game.board(),
        }
    }
}

/// The engine's move and the state it led to.
#[derive(Debug)]
pub struct EngineReply {
    /// Square the engine played.
    pub position: Position,
    /// Search that chose it.
    pub search: SearchResult,
    /// Game after the move.
    pub next: GameResult,
}

/// Failure while the engine takes its turn.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    /// The move was refused.
    #[display("Engine move refused: {}", _0)]
    Move(MoveError),
    /// The search was asked an invalid question.
    #[display("Engine search failed: {}", _0)]
    Query(QueryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_opens_by_default() {
        let game = GameSetup::default().start();
        assert_eq!(game.state(), TurnState::HumanTurn);
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_engine_cannot_move_on_human_turn() {
        let game = GameSetup::default().start();
        assert!(matches!(
            game.play_engine(),
            Err(EngineError::Move(MoveError::WrongTurn(Side::Engine)))
        ));
    }

    #[test]
    fn test_human_cannot_move_on_engine_turn() {
        let config = GameConfig::default().with_first_mover(Side::Engine);
        let game = GameSetup::new(config).start();
        assert_eq!(
            game.play_human(Position::Center).unwrap_err(),
            MoveError::WrongTurn(Side::Human)
        );
    }

    #[test]
    fn test_engine_opening_takes_center() {
        let config = GameConfig::default().with_first_mover(Side::Engine);
        let reply = GameSetup::new(config).start().play_engine().unwrap();
        assert_eq!(reply.position, Position::Center);
        assert_eq!(reply.search.value, 0);
        assert_eq!(reply.next.state(), TurnState::HumanTurn);
        assert_eq!(reply.next.board().get(Position::Center), Square::Occupied(Mark::O));
    }

    #[test]
    fn test_check_does_not_consume() {
        let game = GameSetup::default().start();
        let bad = Move::new(Mark::O, Position::Center);
        assert!(game.check(&bad).is_err());
        assert!(game.check(&Move::new(Mark::X, Position::Center)).is_ok());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_replay_past_the_end_is_game_over() {
        let moves = [
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::O, Position::Center),
            Move::new(Mark::X, Position::TopCenter),
            Move::new(Mark::O, Position::BottomLeft),
            Move::new(Mark::X, Position::TopRight),
            Move::new(Mark::O, Position::BottomRight),
        ];
        assert_eq!(
            GameInProgress::replay(GameConfig::default(), &moves).unwrap_err(),
            MoveError::GameOver
        );
    }

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::from(QueryError::AlreadyTerminal);
        assert!(err.to_string().starts_with("Engine search failed"));
        let source = std::error::Error::source(&err).expect("query error is the source");
        assert_eq!(source.to_string(), QueryError::AlreadyTerminal.to_string());

        let err = EngineError::from(MoveError::GameOver);
        let source = std::error::Error::source(&err).expect("move error is the source");
        assert_eq!(source.to_string(), "Game is already over");
    }
}
