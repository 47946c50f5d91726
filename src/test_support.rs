//! Shared helpers for unit tests.

use std::collections::VecDeque;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;

use crate::board::{Board, Tile};
use crate::moves::MoveTable;
use crate::scramble::walk;

/// Exact distance to the goal of every board reachable from it.
pub fn breadth_first_distances<const SIDE: usize, const CELLS: usize>(
) -> FxHashMap<[Tile; CELLS], u32> {
    let moves = MoveTable::<SIDE, CELLS>::new();
    let goal = *Board::<SIDE, CELLS>::solved().tiles();

    let mut distances = FxHashMap::default();
    distances.insert(goal, 0);
    let mut queue = VecDeque::from([(goal, 0usize)]);

    while let Some((tiles, blank)) = queue.pop_front() {
        let distance = distances[&tiles];
        for &offset in moves.legal_moves(blank, 0) {
            let target = blank.wrapping_add_signed(offset);
            let mut next = tiles;
            next.swap(blank, target);
            if !distances.contains_key(&next) {
                distances.insert(next, distance + 1);
                queue.push_back((next, target));
            }
        }
    }

    distances
}

/// Every board visited by a seeded random walk of `steps` slides from the
/// goal, starting with the goal itself.
pub fn random_walk_boards<const SIDE: usize, const CELLS: usize>(
    seed: u64,
    steps: usize,
) -> Vec<Board<SIDE, CELLS>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut boards = vec![Board::solved()];
    walk::<SIDE, CELLS, _, _>(&mut rng, steps, |board| boards.push(*board));
    boards
}

/// A fresh, empty directory under the system temp dir for one test.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("npuzzle-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
