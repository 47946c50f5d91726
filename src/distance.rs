//! Manhattan distance lookup between tiles and board positions.

use crate::board::{Position, Tile};

/// Builds the distance table at compile time for any board size.
///
/// Tile `t` belongs at position `t`, so the entry for `(tile, position)` is
/// the grid distance between the two indices. The blank's row stays zero.
const fn build_distance_table<const SIDE: usize, const CELLS: usize>() -> [[u8; CELLS]; CELLS] {
    let mut table = [[0u8; CELLS]; CELLS];

    let mut tile = 1;
    while tile < CELLS {
        let mut position = 0;
        while position < CELLS {
            let rows = (tile / SIDE).abs_diff(position / SIDE);
            let columns = (tile % SIDE).abs_diff(position % SIDE);
            table[tile][position] = (rows + columns) as u8;
            position += 1;
        }
        tile += 1;
    }
    table
}

/// Per-(tile, position) Manhattan distances.
pub struct DistanceTable<const SIDE: usize, const CELLS: usize> {
    distances: [[u8; CELLS]; CELLS],
}

impl<const SIDE: usize, const CELLS: usize> DistanceTable<SIDE, CELLS> {
    pub const fn new() -> Self {
        Self {
            distances: build_distance_table::<SIDE, CELLS>(),
        }
    }

    #[inline(always)]
    pub fn distance(&self, tile: Tile, position: Position) -> u8 {
        self.distances[tile as usize][position]
    }
}

impl<const SIDE: usize, const CELLS: usize> Default for DistanceTable<SIDE, CELLS> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_position_has_zero_distance() {
        let table = DistanceTable::<4, 16>::new();
        for tile in 1..16u8 {
            assert_eq!(table.distance(tile, tile as usize), 0);
        }
    }

    #[test]
    fn test_known_distances_3x3() {
        let table = DistanceTable::<3, 9>::new();
        // tile 8 belongs bottom right; top left is two rows and two columns away
        assert_eq!(table.distance(8, 0), 4);
        assert_eq!(table.distance(1, 3), 2);
        assert_eq!(table.distance(5, 4), 1);
    }

    #[test]
    fn test_blank_row_is_zero() {
        let table = DistanceTable::<3, 9>::new();
        for position in 0..9 {
            assert_eq!(table.distance(0, position), 0);
        }
    }

    #[test]
    fn test_adjacent_positions_differ_by_one() {
        let table = DistanceTable::<4, 16>::new();
        for tile in 1..16u8 {
            for position in 0..16 {
                if position % 4 != 3 {
                    let step = table
                        .distance(tile, position)
                        .abs_diff(table.distance(tile, position + 1));
                    assert_eq!(step, 1);
                }
                if position + 4 < 16 {
                    let step = table
                        .distance(tile, position)
                        .abs_diff(table.distance(tile, position + 4));
                    assert_eq!(step, 1);
                }
            }
        }
    }
}
