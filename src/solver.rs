//! Optimal IDA* solver.
//!
//! Key properties:
//! - Iterative deepening on the f-cost bound, jumping straight to the
//!   smallest f-cost that exceeded the previous bound
//! - One board buffer per solve, mutated in place and restored on unwind
//! - Move table that never offers the reverse of the parent move
//! - Additive pattern-database heuristic, so every bound is admissible

use std::fmt;
use std::path::Path;

use log::info;

use crate::board::{format_tiles, Board, Direction, Offset, Position, Tile};
use crate::database::PatternDatabase;
use crate::distance::DistanceTable;
use crate::error::PuzzleError;
use crate::moves::MoveTable;
use crate::persistence::cache_file_name;

/// Result of one bounded depth-first pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    /// The goal was reached; the path stacks hold the solution.
    Found,
    /// Smallest f-cost that exceeded the bound, or `u32::MAX` if nothing
    /// did.
    Exceeded(u32),
}

/// Move tables and heuristic shared by every solve on one board size.
///
/// All tables are read-only after construction. Each call to
/// [`Solver::solve`] owns its own search state.
pub struct Solver<const SIDE: usize, const CELLS: usize> {
    moves: MoveTable<SIDE, CELLS>,
    database: PatternDatabase<SIDE, CELLS>,
}

impl<const SIDE: usize, const CELLS: usize> Solver<SIDE, CELLS> {
    /// Builds the tables, caching the pattern database in the working
    /// directory when `use_persistent_cache` is set.
    pub fn new(use_persistent_cache: bool) -> Self {
        if use_persistent_cache {
            Self::with_cache_dir(".")
        } else {
            Self::uncached()
        }
    }

    /// Builds every table from scratch without touching the disk.
    pub fn uncached() -> Self {
        Self {
            moves: MoveTable::new(),
            database: PatternDatabase::build(&DistanceTable::new()),
        }
    }

    /// Loads the pattern database from `dir`, building and saving it there
    /// if needed.
    pub fn with_cache_dir(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(cache_file_name(CELLS));
        Self {
            moves: MoveTable::new(),
            database: PatternDatabase::load_or_build(&path, &DistanceTable::new()),
        }
    }

    pub fn database(&self) -> &PatternDatabase<SIDE, CELLS> {
        &self.database
    }

    /// Admissible estimate of the moves left to solve `board`.
    pub fn heuristic(&self, board: &Board<SIDE, CELLS>) -> u32 {
        self.database.heuristic(board.tiles())
    }

    /// Validates a flat tile list and solves it.
    pub fn solve_tiles(&self, tiles: &[Tile]) -> Result<Solution, PuzzleError> {
        self.solve(Board::from_slice(tiles)?)
    }

    /// Finds a shortest slide sequence from `board` to the goal.
    ///
    /// Unsolvable boards are rejected up front, so the search always
    /// terminates.
    pub fn solve(&self, board: Board<SIDE, CELLS>) -> Result<Solution, PuzzleError> {
        if !board.is_solvable() {
            return Err(PuzzleError::Unsolvable);
        }

        let mut search = Search::new(&self.moves, &self.database, board);
        search.run()?;

        Ok(Solution {
            side: SIDE,
            initial: board.tiles().to_vec(),
            blank_path: search.pos_blank,
            nodes_expanded: search.count,
        })
    }
}

/// Mutable state of one in-flight solve.
struct Search<'a, const SIDE: usize, const CELLS: usize> {
    moves: &'a MoveTable<SIDE, CELLS>,
    database: &'a PatternDatabase<SIDE, CELLS>,
    node: [Tile; CELLS],
    depth: u32,
    threshold: u32,
    /// Blank position at each depth of the current path.
    pos_blank: Vec<Position>,
    /// Offset taken to reach each depth; 0 at the root.
    movement: Vec<Offset>,
    /// Nodes generated, root included.
    count: u64,
}

impl<'a, const SIDE: usize, const CELLS: usize> Search<'a, SIDE, CELLS> {
    fn new(
        moves: &'a MoveTable<SIDE, CELLS>,
        database: &'a PatternDatabase<SIDE, CELLS>,
        board: Board<SIDE, CELLS>,
    ) -> Self {
        let threshold = database.heuristic(board.tiles());
        Self {
            moves,
            database,
            node: *board.tiles(),
            depth: 0,
            threshold,
            pos_blank: vec![board.blank()],
            movement: vec![0],
            count: 1,
        }
    }

    /// Repeats bounded passes, raising the bound each time, until one
    /// reaches the goal.
    fn run(&mut self) -> Result<(), PuzzleError> {
        loop {
            match self.search() {
                Bound::Found => {
                    info!("Solved in {} moves ({} nodes)", self.depth, self.count);
                    return Ok(());
                }
                Bound::Exceeded(u32::MAX) => return Err(PuzzleError::Exhausted),
                Bound::Exceeded(next) => {
                    info!("threshold: {} count: {}", next, self.count);
                    self.threshold = next;
                }
            }
        }
    }

    /// Depth-first pass bounded by `threshold`.
    fn search(&mut self) -> Bound {
        let h = self.database.heuristic(&self.node);
        if h == 0 {
            return Bound::Found;
        }
        let f = self.depth + h;
        if f > self.threshold {
            return Bound::Exceeded(f);
        }

        // copy the table reference so iterating it doesn't borrow self
        let moves = self.moves;
        let position = self.pos_blank[self.depth as usize];
        let previous = self.movement[self.depth as usize];
        let mut min = u32::MAX;

        for &offset in moves.legal_moves(position, previous) {
            self.count += 1;

            let target = position.wrapping_add_signed(offset);
            self.node.swap(position, target);
            self.depth += 1;
            self.pos_blank.push(target);
            self.movement.push(offset);

            match self.search() {
                Bound::Found => return Bound::Found,
                Bound::Exceeded(f) => min = min.min(f),
            }

            self.movement.pop();
            self.pos_blank.pop();
            self.depth -= 1;
            self.node.swap(position, target);
        }

        Bound::Exceeded(min)
    }
}

/// An optimal slide sequence and the cost of finding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    side: usize,
    initial: Vec<Tile>,
    /// Blank position before the first slide and after every slide.
    blank_path: Vec<Position>,
    nodes_expanded: u64,
}

impl Solution {
    /// Number of slides, which is optimal.
    pub fn move_count(&self) -> usize {
        self.blank_path.len() - 1
    }

    pub fn blank_path(&self) -> &[Position] {
        &self.blank_path
    }

    /// Nodes generated by the search, the root included.
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    pub fn initial(&self) -> &[Tile] {
        &self.initial
    }

    /// Direction of every slide, in order.
    pub fn directions(&self) -> Vec<Direction> {
        self.blank_path
            .windows(2)
            .filter_map(|step| {
                let offset = step[1] as Offset - step[0] as Offset;
                Direction::from_offset(offset, self.side)
            })
            .collect()
    }

    /// The board before the first slide and after every slide.
    pub fn boards(&self) -> Vec<Vec<Tile>> {
        let mut current = self.initial.clone();
        let mut boards = vec![current.clone()];
        for step in self.blank_path.windows(2) {
            current.swap(step[0], step[1]);
            boards.push(current.clone());
        }
        boards
    }

    /// Human-readable listing of every board along the path.
    pub fn render(&self) -> String {
        let boards = self.boards();

        let mut output = String::from("Initial:\n");
        output.push_str(&format_tiles(&boards[0], self.side));
        for (i, (direction, board)) in self.directions().iter().zip(&boards[1..]).enumerate() {
            output.push_str(&format!("\nMove {}: {}\n", i + 1, direction));
            output.push_str(&format_tiles(board, self.side));
        }

        output
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
