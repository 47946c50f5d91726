//! Sliding Tile Puzzle Solver Library
//!
//! Finds provably shortest solutions to `n x n` sliding-tile puzzles with
//! IDA* over an additive row/column pattern database.

pub mod board;
pub mod database;
pub mod distance;
pub mod error;
pub mod moves;
pub mod persistence;
pub mod scramble;
pub mod solver;

#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

use rand::RngCore;

use board::{Board, Tile};
use database::PatternDatabase;
use distance::DistanceTable;
use error::PuzzleError;
use persistence::cache_file_name;
use solver::{Solution, Solver};

/// 2x2 puzzle (three tiles).
pub type Solver2 = Solver<2, 4>;
/// 3x3 puzzle (the 8-puzzle).
pub type Solver3 = Solver<3, 9>;
/// 4x4 puzzle (the 15-puzzle).
pub type Solver4 = Solver<4, 16>;

/// Side lengths with a ready-made solver.
pub const SUPPORTED_SIDES: &[usize] = &[2, 3, 4];

/// Trait that erases compile-time board parameters for dynamic dispatch.
///
/// Both const generics (`SIDE`, `CELLS`) are hidden behind the vtable, so
/// callers can pick a board size at run time without turbofish.
pub trait SolverOps {
    fn side(&self) -> usize;
    fn parse(&self, text: &str) -> Result<Vec<Tile>, PuzzleError>;
    fn solve(&self, tiles: &[Tile]) -> Result<Solution, PuzzleError>;
    fn is_solvable(&self, tiles: &[Tile]) -> Result<bool, PuzzleError>;
    fn heuristic(&self, tiles: &[Tile]) -> Result<u32, PuzzleError>;
    fn scramble(&self, rng: &mut dyn RngCore) -> Vec<Tile>;
}

impl<const SIDE: usize, const CELLS: usize> SolverOps for Solver<SIDE, CELLS> {
    fn side(&self) -> usize {
        SIDE
    }

    fn parse(&self, text: &str) -> Result<Vec<Tile>, PuzzleError> {
        Ok(Board::<SIDE, CELLS>::parse(text)?.tiles().to_vec())
    }

    fn solve(&self, tiles: &[Tile]) -> Result<Solution, PuzzleError> {
        self.solve_tiles(tiles)
    }

    fn is_solvable(&self, tiles: &[Tile]) -> Result<bool, PuzzleError> {
        Ok(Board::<SIDE, CELLS>::from_slice(tiles)?.is_solvable())
    }

    fn heuristic(&self, tiles: &[Tile]) -> Result<u32, PuzzleError> {
        Ok(Solver::heuristic(self, &Board::from_slice(tiles)?))
    }

    fn scramble(&self, rng: &mut dyn RngCore) -> Vec<Tile> {
        scramble::scramble::<SIDE, CELLS, _>(rng).tiles().to_vec()
    }
}

/// Builds the solver for a board of `side x side` cells.
///
/// With `cache_dir` set the pattern database is loaded from (or saved to)
/// that directory. Returns `None` for unsupported sizes.
pub fn solver_for_side(side: usize, cache_dir: Option<&Path>) -> Option<Box<dyn SolverOps>> {
    fn make<const SIDE: usize, const CELLS: usize>(cache_dir: Option<&Path>) -> Box<dyn SolverOps> {
        match cache_dir {
            Some(dir) => Box::new(Solver::<SIDE, CELLS>::with_cache_dir(dir)),
            None => Box::new(Solver::<SIDE, CELLS>::uncached()),
        }
    }

    match side {
        2 => Some(make::<2, 4>(cache_dir)),
        3 => Some(make::<3, 9>(cache_dir)),
        4 => Some(make::<4, 16>(cache_dir)),
        _ => None,
    }
}

/// Builds the pattern database for `side x side` boards and writes it to
/// `cache_dir`, returning the file written.
///
/// Unlike [`solver_for_side`], a failed write is an error here. Returns
/// `None` for unsupported sizes.
pub fn build_database(side: usize, cache_dir: &Path) -> Option<std::io::Result<PathBuf>> {
    fn build<const SIDE: usize, const CELLS: usize>(cache_dir: &Path) -> std::io::Result<PathBuf> {
        let path = cache_dir.join(cache_file_name(CELLS));
        PatternDatabase::<SIDE, CELLS>::build(&DistanceTable::new()).save(&path)?;
        Ok(path)
    }

    match side {
        2 => Some(build::<2, 4>(cache_dir)),
        3 => Some(build::<3, 9>(cache_dir)),
        4 => Some(build::<4, 16>(cache_dir)),
        _ => None,
    }
}
