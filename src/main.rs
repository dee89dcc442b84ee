//! Hua Rong Dao Solver
//!
//! Reads a 4x5 sliding-block puzzle, searches for a sequence of single-cell
//! slides that brings the 2x2 goal block to the exit, and writes every board
//! along the way to the output file.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info, warn};

use huarong::solver::SearchLimits;
use huarong::{grid, persistence, Algorithm};

/// Solves a Hua Rong Dao sliding-block puzzle.
#[derive(Parser)]
#[command(name = "huarong")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The input file that contains the puzzle.
    #[arg(long)]
    inputfile: PathBuf,
    /// The output file that receives the solution.
    #[arg(long)]
    outputfile: PathBuf,
    /// The search algorithm.
    #[arg(long, value_enum)]
    algo: Algorithm,
    /// Give up after expanding this many states.
    #[arg(long)]
    max_expansions: Option<usize>,
    /// Also print the solution to stdout.
    #[arg(long)]
    print: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the puzzle, solves it and writes the trace.
fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let board = persistence::read_board(&cli.inputfile)
        .map_err(|e| format!("{}: {e}", cli.inputfile.display()))?;
    info!("Loaded puzzle from {}", cli.inputfile.display());
    debug!("Initial board:\n{board}");

    let strategy = cli.algo.strategy(SearchLimits {
        max_expansions: cli.max_expansions,
    });
    info!("Searching with {}", strategy.name());
    let outcome = strategy.search(&board);
    let trace = outcome.trace();

    match outcome.moves() {
        Some(moves) => info!("Found a solution with {moves} moves"),
        None => warn!("No solution found, writing an empty trace"),
    }

    persistence::write_solution(&cli.outputfile, &trace)
        .map_err(|e| format!("failed to write {}: {e}", cli.outputfile.display()))?;
    info!("Wrote {}", cli.outputfile.display());

    if cli.print {
        print!("{}", grid::format_solution(&trace));
    }

    Ok(())
}
