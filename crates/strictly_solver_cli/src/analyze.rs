//! One-shot position analysis for the `analyze` command.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use strictly_solver::{
    Board, GameConfig, LINES, Mark, Position, SearchStats, Searcher, Square, is_terminal, score,
};
use tracing::instrument;

/// Result of analyzing one position.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Board as parsed, one row per line.
    pub board: String,
    /// Mark the value is scored for.
    pub engine: Mark,
    /// Mark to move, or `None` if the board is finished.
    pub to_move: Option<Mark>,
    /// +1 engine wins, 0 draw, -1 engine loses, with perfect play.
    pub value: i32,
    /// Best move for the side to move, if any.
    pub best_move: Option<Position>,
    /// Search counters; all zero for a finished board.
    pub stats: SearchStats,
}

/// Parses `board` and searches it.
///
/// When `to_move` is omitted the side to move is inferred from the mark
/// counts and the configured opener. A finished board is scored directly.
///
/// # Errors
///
/// Fails if the board text does not parse, if the position cannot arise
/// in a game, or if `to_move` disagrees with the mark counts.
#[instrument(skip(config))]
pub fn analyze(board: &str, to_move: Option<Mark>, config: &GameConfig) -> Result<Analysis> {
    let parsed: Board = board
        .parse()
        .with_context(|| format!("Failed to parse board {board:?}"))?;

    let first = config.first_mark();
    check_reachable(&parsed, first)?;

    let engine = *config.engine_mark();
    if is_terminal(&parsed) {
        return Ok(Analysis {
            board: parsed.to_string(),
            engine,
            to_move: None,
            value: score(&parsed, engine)?,
            best_move: None,
            stats: SearchStats::default(),
        });
    }

    let expected = parsed.next_mark(first);
    let to_move = match to_move {
        Some(mark) if mark != expected => {
            bail!("{mark} cannot be to move: the mark counts put {expected} on turn")
        }
        _ => expected,
    };
    let mut searcher = Searcher::from_config(config);
    let result = searcher.analyze(&parsed, to_move)?;

    Ok(Analysis {
        board: parsed.to_string(),
        engine,
        to_move: Some(to_move),
        value: result.value,
        best_move: result.best_move,
        stats: result.stats,
    })
}

/// Rejects boards no legal game with `first` opening can produce.
///
/// The opener has as many marks as the other side or one more. At most
/// one mark owns a line, and it must be the mark that moved last.
fn check_reachable(board: &Board, first: Mark) -> Result<()> {
    let second = first.opponent();
    let (openers, others) = (board.count(first), board.count(second));
    if openers != others && openers != others + 1 {
        bail!("Unreachable position: {first} has {openers} marks, {second} has {others}");
    }

    let owns_line = |mark: Mark| {
        LINES
            .iter()
            .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(mark)))
    };

    let last_mover = if openers > others { first } else { second };
    match (owns_line(first), owns_line(second)) {
        (true, true) => bail!("Unreachable position: both {first} and {second} have a line"),
        (false, false) => Ok(()),
        (first_won, _) => {
            let winner = if first_won { first } else { second };
            if winner != last_mover {
                bail!("Unreachable position: {winner} has a line but {last_mover} moved last");
            }
            Ok(())
        }
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        let verdict = match self.value {
            v if v > 0 => format!("{} wins", self.engine),
            v if v < 0 => format!("{} wins", self.engine.opponent()),
            _ => "draw".to_string(),
        };
        writeln!(f, "Value for {}: {:+} ({verdict})", self.engine, self.value)?;
        match (self.to_move, self.best_move) {
            (Some(mark), Some(pos)) => writeln!(
                f,
                "Best move for {mark}: row {}, col {} ({})",
                pos.row(),
                pos.col(),
                pos.label()
            )?,
            _ => writeln!(f, "Game over")?,
        }
        write!(
            f,
            "Nodes: {}  Leaves: {}  Cutoffs: {}",
            self.stats.nodes, self.stats.leaves, self.stats.cutoffs
        )
    }
}
