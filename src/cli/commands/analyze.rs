//! Analyze command - show how the engine values each move in a position

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use serde_json::to_writer_pretty;

use crate::{
    board::CompoundBoard,
    cli::output::{candidate_rows, format_number, print_kv, print_section},
    engine::Engine,
};

#[derive(Parser, Debug)]
#[command(about = "Print the value of every legal move in a position")]
pub struct AnalyzeArgs {
    /// 81 cells in sub-board order ('.', 'X' for us, 'O' for the opponent); empty board if omitted
    #[arg(long)]
    pub board: Option<String>,

    /// Sub-board to move in (1-9)
    #[arg(long, short = 'a', default_value_t = 5)]
    pub active: usize,

    /// Search depth
    #[arg(long, short = 'd', default_value_t = 3)]
    pub depth: u32,

    /// Random seed for the tie-break
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the selection as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    ensure!(
        (1..=9).contains(&args.active),
        "--active must be between 1 and 9, got {}",
        args.active
    );

    let board = match &args.board {
        Some(text) => CompoundBoard::from_string(text).context("parsing --board")?,
        None => CompoundBoard::new(),
    }
    .with_active(args.active - 1);

    let mut engine = Engine::new(args.seed);
    let analysis = engine.analyze(&board, args.depth)?;
    let selection = &analysis.selection;

    print_section("Position");
    print!("{board}");
    print_kv("Active board", &args.active.to_string());
    print_kv("Depth", &args.depth.to_string());
    print_kv("Tree nodes", &format_number(analysis.tree_nodes));

    print_section("Root moves");
    for row in candidate_rows(selection) {
        println!("{row}");
    }
    print_kv("Best value", &selection.best_value.to_string());
    print_kv("Chosen cell", &(selection.chosen.cell + 1).to_string());

    if let Some(path) = args.export {
        let file = File::create(&path)
            .with_context(|| format!("creating export file {}", path.display()))?;
        to_writer_pretty(file, selection)?;
        println!("\nExported selection to {}", path.display());
    }

    Ok(())
}
