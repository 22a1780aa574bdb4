//! Strictly Solver - Unified CLI
//!
//! Play tic-tac-toe against a perfect engine, analyze positions, or audit
//! the engine against every line of play.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod input;
mod play;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, EngineArgs};
use strictly_solver::Mark;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            engine,
            engine_first,
        } => run_play(engine, engine_first),
        Command::Analyze {
            board,
            to_move,
            engine,
            json,
        } => run_analyze(board, to_move, engine, json),
        Command::Audit {
            engine,
            engine_first,
            json,
        } => run_audit(engine, engine_first, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all)]
fn run_play(engine: EngineArgs, engine_first: bool) -> Result<()> {
    let config = engine.resolve(engine_first)?;
    info!(?config, "Starting interactive game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play::run(config, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Analyze a single position
#[instrument(skip(engine))]
fn run_analyze(board: String, to_move: Option<Mark>, engine: EngineArgs, json: bool) -> Result<()> {
    let config = engine.resolve(false)?;
    let analysis = analyze::analyze(&board, to_move, &config)?;

    if json {
        let text = serde_json::to_string_pretty(&analysis).context("Failed to encode analysis")?;
        println!("{text}");
    } else {
        println!("{analysis}");
    }
    Ok(())
}

/// Audit the engine against every human line
#[instrument(skip(engine))]
fn run_audit(engine: EngineArgs, engine_first: bool, json: bool) -> Result<()> {
    let config = engine.resolve(engine_first)?;
    let report = strictly_solver::audit(config).context("Audit aborted")?;

    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{text}");
    } else {
        println!(
            "Games: {}  Engine wins: {}  Draws: {}  Human wins: {}",
            report.games, report.engine_wins, report.draws, report.human_wins
        );
        if report.is_unbeaten() {
            println!("Engine unbeaten.");
        } else {
            println!("Engine lost {} game(s)!", report.human_wins);
        }
    }
    Ok(())
}
