//! Additive row/column pattern database.
//!
//! Every ordered selection of `SIDE` distinct tiles (blank included) is
//! encoded as a base-`CELLS` number and, for each of the `SIDE` lines it
//! could occupy, the table stores that line's share of the heuristic:
//!
//! - row table: Manhattan distance of the row's tiles plus the row's
//!   linear conflict
//! - column table: the column's linear conflict only, since Manhattan
//!   distance is already carried by the rows
//!
//! Summing all rows and columns gives Manhattan distance plus linear
//! conflicts, which is admissible and changes by exactly one per slide.

use std::path::Path;

use log::{info, warn};

use crate::board::{Board, Tile};
use crate::distance::DistanceTable;
use crate::persistence;

/// Pre-computed heuristic contributions for every line arrangement.
pub struct PatternDatabase<const SIDE: usize, const CELLS: usize> {
    rows: Vec<u8>,
    cols: Vec<u8>,
}

impl<const SIDE: usize, const CELLS: usize> PatternDatabase<SIDE, CELLS> {
    /// Number of distinct keys for one line: `CELLS^SIDE`.
    pub const LINE_SIZE: usize = CELLS.pow(SIDE as u32);

    /// Entries per table: one block of keys per line index.
    pub const SIZE: usize = SIDE * Self::LINE_SIZE;

    /// Enumerates every partial permutation and fills both tables.
    pub fn build(distances: &DistanceTable<SIDE, CELLS>) -> Self {
        let mut database = Self {
            rows: vec![0; Self::SIZE],
            cols: vec![0; Self::SIZE],
        };

        let mut selection = [0 as Tile; SIDE];
        let mut used = [false; CELLS];
        database.enumerate(distances, &mut selection, 0, &mut used);
        database
    }

    fn enumerate(
        &mut self,
        distances: &DistanceTable<SIDE, CELLS>,
        selection: &mut [Tile; SIDE],
        slot: usize,
        used: &mut [bool; CELLS],
    ) {
        if slot == SIDE {
            self.record(distances, selection);
            return;
        }

        for tile in 0..CELLS {
            if used[tile] {
                continue;
            }
            used[tile] = true;
            selection[slot] = tile as Tile;
            self.enumerate(distances, selection, slot + 1, used);
            used[tile] = false;
        }
    }

    fn record(&mut self, distances: &DistanceTable<SIDE, CELLS>, selection: &[Tile; SIDE]) {
        let key = Self::encode(selection);

        for line in 0..SIDE {
            let manhattan: u8 = selection
                .iter()
                .enumerate()
                .filter(|&(_, &tile)| tile != 0)
                .map(|(slot, &tile)| distances.distance(tile, line * SIDE + slot))
                .sum();

            let index = line * Self::LINE_SIZE + key;
            self.rows[index] =
                manhattan + linear_conflict(selection, |tile| tile as usize / SIDE == line);
            self.cols[index] = linear_conflict(selection, |tile| tile as usize % SIDE == line);
        }
    }

    /// Reads the database from `path`, or builds it and writes it there.
    ///
    /// A cache that is missing, malformed, or whose heuristic is non-zero on
    /// the solved board is rebuilt. Failing to write the cache is logged and
    /// otherwise ignored.
    pub fn load_or_build(path: &Path, distances: &DistanceTable<SIDE, CELLS>) -> Self {
        if let Some((rows, cols)) = persistence::load(path, Self::SIZE) {
            let database = Self { rows, cols };
            if database.heuristic(Board::<SIDE, CELLS>::solved().tiles()) == 0 {
                info!("Loaded pattern database from {}", path.display());
                return database;
            }
            warn!(
                "Ignoring pattern database at {}: solved board scores non-zero",
                path.display()
            );
        }

        info!("Building pattern database for {} cells", CELLS);
        let database = Self::build(distances);

        if let Err(e) = database.save(path) {
            warn!(
                "Failed to write pattern database to {}: {}",
                path.display(),
                e
            );
        }

        database
    }

    /// Writes both tables to `path` in the cache format.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        persistence::save(path, &self.rows, &self.cols)?;
        info!("Wrote pattern database to {}", path.display());
        Ok(())
    }

    /// Encodes a line of tiles as digits in base `CELLS`, first slot most
    /// significant.
    #[inline(always)]
    pub fn encode(line: &[Tile]) -> usize {
        line.iter().fold(0, |key, &tile| key * CELLS + tile as usize)
    }

    /// Heuristic share of row `row` holding `tiles` left to right.
    pub fn row_contribution(&self, row: usize, tiles: &[Tile; SIDE]) -> u32 {
        self.rows[row * Self::LINE_SIZE + Self::encode(tiles)] as u32
    }

    /// Heuristic share of column `col` holding `tiles` top to bottom.
    pub fn col_contribution(&self, col: usize, tiles: &[Tile; SIDE]) -> u32 {
        self.cols[col * Self::LINE_SIZE + Self::encode(tiles)] as u32
    }

    /// Sum of every row and column contribution of a full board.
    #[inline]
    pub fn heuristic(&self, tiles: &[Tile; CELLS]) -> u32 {
        let mut total = 0;
        for line in 0..SIDE {
            let mut row_key = 0;
            let mut col_key = 0;
            for slot in 0..SIDE {
                row_key = row_key * CELLS + tiles[line * SIDE + slot] as usize;
                col_key = col_key * CELLS + tiles[slot * SIDE + line] as usize;
            }
            let base = line * Self::LINE_SIZE;
            total += self.rows[base + row_key] as u32 + self.cols[base + col_key] as u32;
        }
        total
    }

    pub fn rows(&self) -> &[u8] {
        &self.rows
    }

    pub fn cols(&self) -> &[u8] {
        &self.cols
    }
}

/// Extra moves forced by tiles that sit in their goal line in the wrong
/// order.
///
/// Tiles outside their goal line and the blank are ignored. The tiles that
/// may stay are the longest subsequence already in goal order; each of the
/// others has to step out of the line and back, two extra moves apiece.
fn linear_conflict<const SIDE: usize>(line: &[Tile; SIDE], belongs: impl Fn(Tile) -> bool) -> u8 {
    let mut longest = [0u8; SIDE];
    let mut members = 0u8;
    let mut keep = 0u8;

    for i in 0..SIDE {
        let tile = line[i];
        if tile == 0 || !belongs(tile) {
            continue;
        }
        members += 1;

        // longest ordered run of members ending at slot i
        let mut best = 1;
        for j in 0..i {
            if longest[j] > 0 && line[j] < tile {
                best = best.max(longest[j] + 1);
            }
        }
        longest[i] = best;
        keep = keep.max(best);
    }

    2 * (members - keep)
}
