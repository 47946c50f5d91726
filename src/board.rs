//! Board representation for sliding-tile puzzles.
//!
//! Generic over the side length (`SIDE`) and total cell count
//! (`CELLS = SIDE^2`). The board is a flat row-major array where each cell
//! holds a tile number, or 0 for the blank. The solved board is the identity
//! arrangement: the blank at position 0 and tile `t` at position `t`.

use std::fmt;

use crate::error::PuzzleError;

/// A tile number; 0 is the blank.
pub type Tile = u8;

/// Index into the flat board, row-major.
pub type Position = usize;

/// Signed displacement of the blank: `new = old + offset`.
pub type Offset = isize;

/// Direction the blank travels in a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed exploration order used by the move table.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Board offset of this direction on a board with the given side length.
    #[inline]
    pub const fn offset(self, side: usize) -> Offset {
        match self {
            Direction::Up => -(side as Offset),
            Direction::Down => side as Offset,
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    /// Recovers the direction from a board offset, if it is a single slide.
    pub fn from_offset(offset: Offset, side: usize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.offset(side) == offset)
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// A validated tile arrangement.
///
/// Every value in `0..CELLS` appears exactly once. The only ways to obtain
/// a board are [`Board::solved`] and the validating constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const SIDE: usize, const CELLS: usize> {
    tiles: [Tile; CELLS],
}

impl<const SIDE: usize, const CELLS: usize> Board<SIDE, CELLS> {
    const SHAPE: () = {
        assert!(SIDE * SIDE == CELLS, "CELLS must equal SIDE^2");
        assert!(SIDE >= 2, "SIDE must be at least 2");
        assert!(CELLS <= 256, "CELLS must be <= 256 (u8 tiles)");
    };

    /// The goal arrangement `[0, 1, ..., CELLS - 1]`.
    pub const fn solved() -> Self {
        let () = Self::SHAPE;
        let mut tiles = [0; CELLS];
        let mut i = 0;
        while i < CELLS {
            tiles[i] = i as Tile;
            i += 1;
        }
        Self { tiles }
    }

    /// Validates a flat row-major tile list.
    pub fn from_slice(values: &[Tile]) -> Result<Self, PuzzleError> {
        let () = Self::SHAPE;
        if values.len() != CELLS {
            return Err(PuzzleError::WrongLength {
                expected: CELLS,
                found: values.len(),
            });
        }

        let mut seen = [false; CELLS];
        let mut tiles = [0; CELLS];
        for (cell, &value) in values.iter().enumerate() {
            let index = value as usize;
            if index >= CELLS {
                return Err(PuzzleError::OutOfRange {
                    value: index,
                    cells: CELLS,
                });
            }
            if seen[index] {
                return Err(PuzzleError::Duplicate { value });
            }
            seen[index] = true;
            tiles[cell] = value;
        }

        Ok(Self { tiles })
    }

    /// Parses whitespace-separated tile numbers, e.g. `"1 0 2 3 4 5 6 7 8"`.
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let mut values = Vec::with_capacity(CELLS);
        for token in text.split_whitespace() {
            let value: usize = token
                .parse()
                .map_err(|_| PuzzleError::InvalidToken(token.to_string()))?;
            if value >= CELLS {
                return Err(PuzzleError::OutOfRange {
                    value,
                    cells: CELLS,
                });
            }
            values.push(value as Tile);
        }
        Self::from_slice(&values)
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile; CELLS] {
        &self.tiles
    }

    /// Position of the blank.
    pub fn blank(&self) -> Position {
        // a validated board always holds exactly one blank
        self.tiles.iter().position(|&tile| tile == 0).unwrap_or(0)
    }

    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(position, &tile)| tile as usize == position)
    }

    /// Number of pairs of non-blank tiles that appear in the wrong order.
    pub fn inversions(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(i, &tile)| {
                self.tiles[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < tile)
                    .count()
            })
            .sum()
    }

    /// Whether the goal board is reachable from this one.
    ///
    /// A vertical slide moves one tile past `SIDE - 1` others, so for odd
    /// sides the inversion parity never changes; for even sides it flips
    /// together with the blank's row. The goal has no inversions and the
    /// blank in row 0.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if SIDE % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank() / SIDE) % 2 == 0
        }
    }

    /// Moves the blank to `to` by swapping it with the tile there.
    ///
    /// The caller is responsible for `to` being adjacent to the blank.
    pub fn slide_blank(&mut self, to: Position) {
        let from = self.blank();
        self.tiles.swap(from, to);
    }
}

impl<const SIDE: usize, const CELLS: usize> Default for Board<SIDE, CELLS> {
    fn default() -> Self {
        Self::solved()
    }
}

impl<const SIDE: usize, const CELLS: usize> fmt::Display for Board<SIDE, CELLS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_tiles(&self.tiles, SIDE))
    }
}

/// Formats a flat board as rows of tile numbers.
///
/// Cells are right aligned to the widest tile number; the blank shows
/// as '.'.
pub fn format_tiles(tiles: &[Tile], side: usize) -> String {
    let largest = tiles.len().saturating_sub(1);
    let width = largest.to_string().len();

    let mut output = String::new();
    for row in tiles.chunks(side) {
        for (column, &tile) in row.iter().enumerate() {
            if column > 0 {
                output.push(' ');
            }
            if tile == 0 {
                output.push_str(&format!("{:>width$}", '.', width = width));
            } else {
                output.push_str(&format!("{:>width$}", tile, width = width));
            }
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::breadth_first_distances;

    type Board3 = Board<3, 9>;
    type Board4 = Board<4, 16>;

    #[test]
    fn test_solved_board_is_identity() {
        let board = Board3::solved();
        assert_eq!(board.tiles(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.blank(), 0);
        assert!(board.is_solved());
        assert_eq!(board.inversions(), 0);
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert_eq!(
            Board3::from_slice(&[0, 1, 2]),
            Err(PuzzleError::WrongLength {
                expected: 9,
                found: 3
            })
        );
    }

    #[test]
    fn test_from_slice_rejects_duplicates() {
        assert_eq!(
            Board3::from_slice(&[0, 1, 2, 3, 4, 5, 6, 7, 7]),
            Err(PuzzleError::Duplicate { value: 7 })
        );
    }

    #[test]
    fn test_from_slice_rejects_out_of_range() {
        assert_eq!(
            Board3::from_slice(&[0, 1, 2, 3, 4, 5, 6, 7, 9]),
            Err(PuzzleError::OutOfRange { value: 9, cells: 9 })
        );
    }

    #[test]
    fn test_parse_reads_whitespace_separated_tiles() {
        let board = Board3::parse(" 1 0 2\n3 4 5\n6 7 8 ").unwrap();
        assert_eq!(board.tiles(), &[1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.blank(), 1);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            Board3::parse("1 0 x 3 4 5 6 7 8"),
            Err(PuzzleError::InvalidToken("x".to_string()))
        );
        assert_eq!(
            Board3::parse("1 0 300 3 4 5 6 7 8"),
            Err(PuzzleError::OutOfRange {
                value: 300,
                cells: 9
            })
        );
    }

    #[test]
    fn test_inversions_ignore_blank() {
        let board = Board3::from_slice(&[1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert_eq!(board.inversions(), 0);
        let board = Board3::from_slice(&[2, 1, 0, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(board.inversions(), 1);
    }

    #[test]
    fn test_solvability_matches_reachability_2x2() {
        let reachable = breadth_first_distances::<2, 4>();
        assert_eq!(reachable.len(), 12, "half of the 24 arrangements");

        for a in 0..4u8 {
            for b in 0..4u8 {
                for c in 0..4u8 {
                    for d in 0..4u8 {
                        let Ok(board) = Board::<2, 4>::from_slice(&[a, b, c, d]) else {
                            continue;
                        };
                        assert_eq!(
                            board.is_solvable(),
                            reachable.contains_key(board.tiles()),
                            "mismatch for {:?}",
                            board.tiles()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_solvability_matches_reachability_3x3() {
        let reachable = breadth_first_distances::<3, 9>();
        assert_eq!(reachable.len(), 181_440);
        for tiles in reachable.keys() {
            assert!(Board3::from_slice(tiles).unwrap().is_solvable());
        }

        // swapping two tiles flips parity
        let board = Board3::from_slice(&[0, 2, 1, 3, 4, 5, 6, 7, 8]).unwrap();
        assert!(!board.is_solvable());
    }

    #[test]
    fn test_even_side_solvability_uses_blank_row() {
        // one vertical slide from the goal: blank moves down a row
        let board = Board4::from_slice(&[4, 1, 2, 3, 0, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15])
            .unwrap();
        assert_eq!(board.inversions(), 3);
        assert!(board.is_solvable());

        let board = Board4::from_slice(&[0, 2, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15])
            .unwrap();
        assert!(!board.is_solvable());
    }

    #[test]
    fn test_slide_blank_swaps_cells() {
        let mut board = Board3::solved();
        board.slide_blank(3);
        assert_eq!(board.tiles(), &[3, 1, 2, 0, 4, 5, 6, 7, 8]);
        assert_eq!(board.blank(), 3);
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::Up.offset(4), -4);
        assert_eq!(Direction::Right.offset(4), 1);
        assert_eq!(Direction::from_offset(-3, 3), Some(Direction::Up));
        assert_eq!(Direction::from_offset(2, 3), None);
        for direction in Direction::ALL {
            assert_eq!(
                direction.opposite().offset(5),
                -direction.offset(5),
                "{direction} is not reversed by its opposite"
            );
        }
    }

    #[test]
    fn test_format_tiles_aligns_columns() {
        assert_eq!(format_tiles(&[1, 0, 2, 3], 2), "1 .\n2 3\n");
        let board = Board4::solved();
        assert!(board.to_string().starts_with(" .  1  2  3\n 4  5  6  7\n"));
    }
}
