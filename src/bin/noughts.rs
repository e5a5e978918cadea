//! Command-line analysis tool for the perfect-play engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use noughts::{Board, Game, Outcome, Player, lines, solver};

#[derive(Parser)]
#[command(name = "noughts", about = "Perfect-play tic-tac-toe analysis")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a position and report the engine's move
    Analyze {
        /// Board as 9 cell characters, e.g. "XX./.O./..."
        board: String,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play the engine against a seeded random opponent
    Selfplay {
        /// Number of games to play
        #[arg(long, default_value_t = 100)]
        games: usize,
        /// RNG seed for the random opponent
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Serialize)]
struct AnalysisReport {
    board: String,
    outcome: Outcome,
    value: solver::Score,
    engine_move: Option<(usize, usize)>,
    engine_threats: Vec<(usize, usize)>,
    opponent_threats: Vec<(usize, usize)>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze { board, json } => analyze(&board, json),
        Command::Selfplay { games, seed } => selfplay(games, seed),
    }
}

fn analyze(input: &str, json: bool) -> Result<()> {
    let board = Board::from_string(input).context("failed to parse board")?;
    let outcome = board.classify();

    let report = AnalysisReport {
        board: board.encode(),
        outcome,
        value: solver::evaluate(&board, true),
        engine_move: if outcome.is_terminal() {
            None
        } else {
            solver::select_move(&board)
        },
        engine_threats: lines::winning_cells(&board, Player::O),
        opponent_threats: lines::winning_cells(&board, Player::X),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{board}");
    println!();
    println!("outcome: {:?}", report.outcome);
    println!("value for O (O to move): {:?}", report.value);
    match report.engine_move {
        Some((row, col)) => println!("engine move: ({row}, {col})"),
        None => println!("engine move: none"),
    }
    if !report.engine_threats.is_empty() {
        println!("O completes a line at: {:?}", report.engine_threats);
    }
    if !report.opponent_threats.is_empty() {
        println!("X completes a line at: {:?}", report.opponent_threats);
    }
    Ok(())
}

fn selfplay(games: usize, seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut wins = 0usize;
    let mut draws = 0usize;
    let mut losses = 0usize;

    for _ in 0..games {
        let mut game = Game::new();
        while !game.is_over() {
            match game.to_move() {
                Player::X => {
                    let open = game.board().empty_cells();
                    let &(row, col) = open
                        .choose(&mut rng)
                        .context("non-terminal board must have an empty cell")?;
                    game.play(row, col)?;
                }
                Player::O => {
                    game.play_engine()?;
                }
            }
        }
        match game.outcome() {
            Outcome::Win(Player::O) => wins += 1,
            Outcome::Win(Player::X) => losses += 1,
            Outcome::Draw => draws += 1,
            Outcome::Ongoing => unreachable!("loop exits only on terminal outcome"),
        }
    }

    println!(
        "{games} games vs random X (seed {seed}): {wins} engine wins, {draws} draws, {losses} losses"
    );
    Ok(())
}
