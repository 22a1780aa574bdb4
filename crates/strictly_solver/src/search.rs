//! Minimax search with optional alpha-beta pruning.
//!
//! The searcher plays one mark (the maximizing side). Every node of the
//! tree is a copy of its parent board with one more mark, so the board a
//! caller passes in is never modified and siblings never see each
//! other's hypothetical moves.
//!
//! # Example
//!
//! ```
//! use strictly_solver::{Board, Mark, Position, Pruning, Searcher};
//!
//! let board: Board = "XOX/XO./..O".parse().unwrap();
//! let mut searcher = Searcher::new(Mark::O, Pruning::AlphaBeta);
//! assert_eq!(searcher.best_move(&board).unwrap(), Position::BottomCenter);
//! ```

use super::config::{GameConfig, Pruning};
use super::error::QueryError;
use super::ordering::move_order;
use super::rules::{is_terminal, terminal::terminal_value};
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Bound larger than any game value, used for the alpha-beta window.
pub const INFINITY: i32 = i32::MAX;

/// Deepest the tree can go: one ply per square.
pub const MAX_PLIES: usize = 9;

/// Counters collected during one root search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, root included.
    pub nodes: u64,
    /// Terminal boards scored.
    pub leaves: u64,
    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,
}

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Game value for the maximizing side: +1 forced win, 0 forced draw,
    /// -1 forced loss, assuming perfect play from here.
    pub value: i32,
    /// Move achieving `value`. `None` only for a terminal board.
    pub best_move: Option<Position>,
    /// Search counters.
    pub stats: SearchStats,
}

/// Exhaustive adversarial search for one mark.
#[derive(Debug, Clone)]
pub struct Searcher {
    engine: Mark,
    pruning: Pruning,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher maximizing for `engine`.
    #[instrument]
    pub fn new(engine: Mark, pruning: Pruning) -> Self {
        Self {
            engine,
            pruning,
            stats: SearchStats::default(),
        }
    }

    /// Creates a searcher for the engine described by `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(*config.engine_mark(), *config.pruning())
    }

    /// Mark this searcher maximizes for.
    pub fn engine(&self) -> Mark {
        self.engine
    }

    /// Pruning mode.
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Counters from the most recent search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches `board` with the given role and window.
    ///
    /// When `maximizing` is true the engine's mark is placed next,
    /// otherwise the opponent's. Pass `-INFINITY, INFINITY` for an exact
    /// value; a narrower window is honoured as-is.
    ///
    /// # Errors
    ///
    /// [`QueryError::AlreadyTerminal`] if `board` is finished. Terminal
    /// boards are only valid as interior nodes of the tree.
    #[instrument(skip(self, board), fields(engine = %self.engine, pruning = %self.pruning))]
    pub fn search(
        &mut self,
        board: &Board,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> Result<SearchResult, QueryError> {
        if is_terminal(board) {
            warn!(%board, "search requested for a finished board");
            return Err(QueryError::AlreadyTerminal);
        }

        self.stats = SearchStats::default();
        let (value, best_move) = self.minimax(*board, maximizing, alpha, beta, board.occupied());

        debug!(
            value,
            ?best_move,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            cutoffs = self.stats.cutoffs,
            "Search complete"
        );

        Ok(SearchResult {
            value,
            best_move,
            stats: self.stats,
        })
    }

    /// Best move for the engine on `board`, engine to move.
    ///
    /// # Errors
    ///
    /// [`QueryError::AlreadyTerminal`] if `board` is finished.
    #[instrument(skip(self, board))]
    pub fn best_move(&mut self, board: &Board) -> Result<Position, QueryError> {
        let result = self.search(board, true, -INFINITY, INFINITY)?;
        // A live board always has at least one candidate.
        result.best_move.ok_or(QueryError::AlreadyTerminal)
    }

    /// Full-window search with `to_move` about to play.
    ///
    /// The value is from the engine's point of view regardless of who
    /// moves.
    ///
    /// # Errors
    ///
    /// [`QueryError::AlreadyTerminal`] if `board` is finished.
    #[instrument(skip(self, board))]
    pub fn analyze(&mut self, board: &Board, to_move: Mark) -> Result<SearchResult, QueryError> {
        self.search(board, to_move == self.engine, -INFINITY, INFINITY)
    }

    fn minimax(
        &mut self,
        board: Board,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        depth: usize,
    ) -> (i32, Option<Position>) {
        debug_assert!(depth <= MAX_PLIES, "search deeper than {MAX_PLIES} plies");
        self.stats.nodes += 1;

        if is_terminal(&board) {
            self.stats.leaves += 1;
            return (terminal_value(&board, self.engine), None);
        }

        let mark = if maximizing {
            self.engine
        } else {
            self.engine.opponent()
        };
        let mut best_value = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = None;

        for pos in move_order(&board) {
            let child = board.with_move(pos, mark);
            let (value, _) = self.minimax(child, !maximizing, alpha, beta, depth + 1);

            // Strict comparison: the first move in heuristic order wins ties.
            let improved = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improved {
                best_value = value;
                best_move = Some(pos);
            }

            if self.pruning == Pruning::AlphaBeta {
                if maximizing {
                    alpha = alpha.max(best_value);
                } else {
                    beta = beta.min(best_value);
                }
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        (best_value, best_move)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
