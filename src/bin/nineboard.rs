//! nineboard - negamax engine for nine-board tic-tac-toe
//!
//! `nineboard play -p <port>` joins a game on the server; `nineboard analyze`
//! evaluates a single position. Logging is controlled with `RUST_LOG`.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nineboard")]
#[command(version, about = "Nine-board tic-tac-toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to a game server and play
    Play(nineboard::cli::commands::play::PlayArgs),

    /// Evaluate every legal move in a position
    Analyze(nineboard::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => nineboard::cli::commands::play::execute(args),
        Commands::Analyze(args) => nineboard::cli::commands::analyze::execute(args),
    }
}
