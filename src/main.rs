use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chiaro::error::Result;
use chiaro::puzzle::{Color, Position, Puzzle};
use chiaro::solver::{self, module::SolverModule, stats::render_stats_table, translate};

#[derive(Parser, Debug)]
#[command(author, version, about = "Solves dark/light grid puzzles", long_about = None)]
struct Args {
    /// Path to a puzzle in JSON form.
    puzzle: PathBuf,

    /// Print per-module solver statistics after solving.
    #[arg(long)]
    stats: bool,
}

fn render_grid(puzzle: &Puzzle) -> String {
    let mut out = String::new();
    for y in 0..puzzle.height() {
        for x in 0..puzzle.width() {
            let tile = puzzle.tile(Position::new(x, y));
            out.push(if !tile.exists {
                ' '
            } else {
                match tile.color {
                    Color::Dark => '#',
                    Color::Light => '.',
                    Color::Gray => '?',
                }
            });
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let puzzle: Puzzle = serde_json::from_str(&fs::read_to_string(&args.puzzle)?)?;
    info!(path = %args.puzzle.display(), "loaded puzzle");

    let (solution, stats) = solver::solve(&puzzle)?;
    match solution {
        Some(solution) => {
            println!("Solution found!");
            print!("{}", render_grid(&solution));
        }
        None => println!("No solution exists."),
    }

    if args.stats {
        let (_, modules) = translate::translate(&puzzle)?;
        let descriptors: Vec<_> = modules.iter().map(|m| m.descriptor()).collect();
        println!("\n{}", render_stats_table(&stats, &descriptors));
    }
    Ok(())
}
