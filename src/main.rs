//! Trigo: three players, one board, captures by surrounding.
//!
//! ## Usage
//!
//! - `trigo` - Play at the console
//! - `trigo play --seed 7` - Play with a reproducible turn order
//! - `trigo demo` - Show a scripted corner capture

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use trigo::board::{Board, Player};
use trigo::capture;
use trigo::constants::N;
use trigo::session;

/// Trigo: a three-player capture game
#[derive(Parser)]
#[command(name = "trigo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log capture events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactive games at the console
    Play {
        /// Seed for the turn-order shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a scripted capture demo
    Demo,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Play { seed }) => run_play(seed),
        None => run_play(None),
        Some(Commands::Demo) => run_demo(),
    }
}

fn run_play(seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let games = session::run(&mut stdin.lock(), &mut stdout, &mut rng, N)
        .context("console session failed")?;
    tracing::info!(games, "exiting");
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Trigo: corner capture demo\n");

    let (x, o) = (Player('X'), Player('O'));
    let mut board = Board::new(N);
    board.place(0, 0, o).context("placing O")?;
    board.place(0, 1, x).context("placing first X")?;
    println!("{board}");

    board.place(1, 0, x).context("placing second X")?;
    let outcome = capture::resolve(&mut board, 1, 0, x);
    println!("X at (1,0): {outcome:?}");
    println!("{board}");
    Ok(())
}
