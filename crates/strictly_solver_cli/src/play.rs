//! Interactive game loop between a human at the terminal and the engine.
//!
//! The loop is generic over its input and output so a scripted game can
//! drive it in tests.

use crate::input::parse_move;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use strictly_solver::{
    Board, GameConfig, GameInProgress, GameResult, GameSetup, Move, Outcome, Position, Side,
    Square,
};
use tracing::{debug, info, instrument};

/// Renders the board with 1-based row and column headers.
pub fn render_board(board: &Board) -> String {
    let mut lines = vec!["    1   2   3".to_string()];
    for row in 1..=3 {
        let cells: Vec<String> = (1..=3)
            .filter_map(|col| Position::from_coords(row, col))
            .map(|pos| match board.get(pos) {
                Square::Empty => "·".to_string(),
                Square::Occupied(mark) => mark.to_string(),
            })
            .collect();
        lines.push(format!("{row}   {}", cells.join(" | ")));
        if row < 3 {
            lines.push("   ---+---+---".to_string());
        }
    }
    lines.join("\n")
}

/// Plays one full game and returns its outcome.
///
/// # Errors
///
/// Fails if input closes before the game ends, on I/O errors, or if the
/// engine's move is refused.
#[instrument(skip(input, out))]
pub fn run<R: BufRead, W: Write>(config: GameConfig, input: &mut R, out: &mut W) -> Result<Outcome> {
    writeln!(
        out,
        "Tic-Tac-Toe: you ({}) vs engine ({})",
        config.human_mark(),
        config.engine_mark()
    )?;
    writeln!(out, "Enter your move as 'row col' with rows and columns 1-3 (e.g. 1 3).")?;

    let mut state = GameResult::InProgress(GameSetup::new(config).start());
    loop {
        state = match state {
            GameResult::Finished(game) => {
                let outcome = game.outcome();
                writeln!(out, "\n{}\n", render_board(game.board()))?;
                writeln!(out, "{}", verdict(outcome))?;
                info!(%outcome, moves = game.history().len(), "Game over");
                return Ok(outcome);
            }
            GameResult::InProgress(game) => match game.side_to_move() {
                Side::Human => {
                    writeln!(out, "\n{}\n", render_board(game.board()))?;
                    let position = prompt_move(&game, input, out)?;
                    game.play_human(position)?
                }
                Side::Engine => {
                    writeln!(out, "Engine is thinking...")?;
                    let reply = game.play_engine()?;
                    writeln!(
                        out,
                        "Engine chose: row {}, col {}",
                        reply.position.row(),
                        reply.position.col()
                    )?;
                    reply.next
                }
            },
        };
    }
}

/// Reads lines until one names a legal square for the human.
fn prompt_move<R: BufRead, W: Write>(
    game: &GameInProgress,
    input: &mut R,
    out: &mut W,
) -> Result<Position> {
    let mut line = String::new();
    loop {
        write!(out, "Your move (row col): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("Input closed before the game finished");
        }

        let Some(position) = parse_move(&line) else {
            debug!(input = line.trim(), "Unparsable move");
            writeln!(out, "Invalid move. Use 'row col' with values 1-3.")?;
            continue;
        };

        match game.check(&Move::new(game.to_move(), position)) {
            Ok(()) => return Ok(position),
            Err(e) => {
                debug!(error = %e, "Rejected move");
                writeln!(out, "Invalid move: {e}. Try again.")?;
            }
        }
    }
}

fn verdict(outcome: Outcome) -> &'static str {
    match outcome.winner() {
        Some(Side::Human) => "You win! Nice job.",
        Some(Side::Engine) => "Engine wins. Better luck next time.",
        None => "It's a draw.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Tries every square in row-major order; enough to finish any game.
    const EVERY_SQUARE: &str = "1 1\n1 2\n1 3\n2 1\n2 2\n2 3\n3 1\n3 2\n3 3\n";

    fn play(config: GameConfig, script: &str) -> (Result<Outcome>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run(config, &mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_render_empty_board() {
        let rendered = render_board(&Board::new());
        assert_eq!(rendered.matches('·').count(), 9);
        assert!(rendered.starts_with("    1   2   3"));
    }

    #[test]
    fn test_render_marks() {
        let board: Board = "X../.O./...".parse().unwrap();
        let rendered = render_board(&board);
        assert!(rendered.contains("1   X | · | ·"));
        assert!(rendered.contains("2   · | O | ·"));
    }

    #[test]
    fn test_scripted_game_never_beats_engine() {
        let (result, output) = play(GameConfig::default(), EVERY_SQUARE);
        let outcome = result.unwrap();
        assert_ne!(outcome, Outcome::HumanWin);
        assert!(output.contains("Engine chose: row"));
    }

    #[test]
    fn test_bad_input_is_reprompted() {
        let script = format!("hello\n0 4\n{EVERY_SQUARE}");
        let (result, output) = play(GameConfig::default(), &script);
        assert!(result.is_ok());
        assert!(output.contains("Invalid move. Use 'row col'"));
    }

    #[test]
    fn test_occupied_square_is_reprompted() {
        // The engine answers 1 1 with the center, so 2 2 is refused.
        let script = format!("1 1\n2 2\n{EVERY_SQUARE}");
        let (result, output) = play(GameConfig::default(), &script);
        assert!(result.is_ok());
        assert!(output.contains("Engine chose: row 2, col 2"));
        assert!(output.contains("already occupied"));
    }

    #[test]
    fn test_engine_first_opens_in_center() {
        let config = GameConfig::default().with_first_mover(Side::Engine);
        let (result, output) = play(config, EVERY_SQUARE);
        assert_ne!(result.unwrap(), Outcome::HumanWin);
        let first_line = output.lines().find(|l| l.starts_with("Engine chose")).unwrap();
        assert_eq!(first_line, "Engine chose: row 2, col 2");
    }

    #[test]
    fn test_verdict_names_the_winner() {
        assert!(verdict(Outcome::HumanWin).starts_with("You win"));
        assert!(verdict(Outcome::EngineWin).starts_with("Engine wins"));
        assert_eq!(verdict(Outcome::Draw), "It's a draw.");
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, _) = play(GameConfig::default(), "");
        assert!(result.is_err());
    }
}
