//! Sliding Tile Puzzle Solver
//!
//! Solves `n x n` sliding-tile puzzles optimally. The goal board has the
//! blank in the top left corner followed by tiles 1, 2, 3, ... in row-major
//! order. Start boards are given as whitespace-separated tile numbers with 0
//! for the blank, or scrambled at random.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::Env;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use npuzzle::{build_database, solver_for_side, SolverOps, SUPPORTED_SIDES};

/// Finds shortest solutions to sliding-tile puzzles.
#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length (2, 3 or 4).
    #[arg(long, global = true, default_value_t = 3)]
    side: usize,

    /// Build the pattern database in memory instead of using the cache file.
    #[arg(long, global = true)]
    no_cache: bool,

    /// Directory holding the pattern database cache.
    #[arg(long, global = true, default_value = ".")]
    cache_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board, or a random one when none is given.
    Solve {
        /// Tiles in row-major order, 0 for the blank, e.g. "1 0 2 3 4 5 6 7 8".
        tiles: Option<String>,
        /// Seed for the random board.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Report whether a board can be solved.
    Check {
        /// Tiles in row-major order, 0 for the blank.
        tiles: String,
    },
    /// Build the pattern database and write it to the cache directory.
    BuildDb,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    match &cli.command {
        Some(Command::BuildDb) => run_build_db(cli),
        Some(Command::Solve { tiles, seed }) => {
            run_solve(load_solver(cli)?.as_ref(), tiles.as_deref(), *seed)
        }
        Some(Command::Check { tiles }) => run_check(load_solver(cli)?.as_ref(), tiles),
        // default: scramble and solve
        None => run_solve(load_solver(cli)?.as_ref(), None, None),
    }
}

fn unsupported_side(side: usize) -> String {
    format!(
        "unsupported side {} (supported: {:?})",
        side, SUPPORTED_SIDES
    )
}

/// Builds the solver, reading or writing the cache unless `--no-cache`.
fn load_solver(cli: &Cli) -> Result<Box<dyn SolverOps>, String> {
    let cache_dir = (!cli.no_cache).then_some(cli.cache_dir.as_path());
    solver_for_side(cli.side, cache_dir).ok_or_else(|| unsupported_side(cli.side))
}

/// Builds the pattern database and writes it to the cache directory.
fn run_build_db(cli: &Cli) -> Result<(), String> {
    if cli.no_cache {
        return Err("build-db writes the cache; drop --no-cache".to_string());
    }

    let path = build_database(cli.side, &cli.cache_dir)
        .ok_or_else(|| unsupported_side(cli.side))?
        .map_err(|e| {
            format!(
                "failed to write pattern database to {}: {}",
                cli.cache_dir.display(),
                e
            )
        })?;
    println!("Wrote pattern database to {}", path.display());
    Ok(())
}

/// Solves the given board, or a scrambled one, and prints the path.
fn run_solve(solver: &dyn SolverOps, tiles: Option<&str>, seed: Option<u64>) -> Result<(), String> {
    let tiles = match tiles {
        Some(text) => solver.parse(text).map_err(|e| e.to_string())?,
        None => {
            let mut rng: Box<dyn RngCore> = match seed {
                Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
                None => Box::new(rand::thread_rng()),
            };
            solver.scramble(rng.as_mut())
        }
    };

    let solution = solver.solve(&tiles).map_err(|e| e.to_string())?;
    println!("{}", solution);
    println!(
        "Found optimal solution with {} moves ({} nodes)",
        solution.move_count(),
        solution.nodes_expanded()
    );
    Ok(())
}

/// Prints whether the board is solvable.
fn run_check(solver: &dyn SolverOps, tiles: &str) -> Result<(), String> {
    let tiles = solver.parse(tiles).map_err(|e| e.to_string())?;
    if solver.is_solvable(&tiles).map_err(|e| e.to_string())? {
        let bound = solver.heuristic(&tiles).map_err(|e| e.to_string())?;
        println!("solvable (at least {} moves)", bound);
    } else {
        println!("unsolvable");
    }
    Ok(())
}
