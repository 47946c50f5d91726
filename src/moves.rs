//! Legal blank moves per board position.
//!
//! For every position the table holds the legal offsets keyed by the offset
//! of the move that led there, with the reverse of that move removed so the
//! search never immediately undoes its parent. Key 0 is the root, which has
//! no parent and keeps the full set.

use rustc_hash::FxHashMap;

use crate::board::{Direction, Offset, Position};

/// Legal offsets for one position, keyed by the parent move's offset.
type PositionMoves = FxHashMap<Offset, Vec<Offset>>;

/// Pre-computed move lookup for a `SIDE x SIDE` board.
pub struct MoveTable<const SIDE: usize, const CELLS: usize> {
    next: [PositionMoves; CELLS],
}

impl<const SIDE: usize, const CELLS: usize> MoveTable<SIDE, CELLS> {
    pub fn new() -> Self {
        Self {
            next: std::array::from_fn(build_position_moves::<SIDE>),
        }
    }

    /// Offsets the blank may take from `position` when it arrived there via
    /// `previous` (0 at the root). Order is Up, Down, Left, Right.
    #[inline]
    pub fn legal_moves(&self, position: Position, previous: Offset) -> &[Offset] {
        self.next[position]
            .get(&previous)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl<const SIDE: usize, const CELLS: usize> Default for MoveTable<SIDE, CELLS> {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns true if the blank at `position` can travel in `direction`.
#[inline]
const fn is_legal<const SIDE: usize>(position: Position, direction: Direction) -> bool {
    let row = position / SIDE;
    let column = position % SIDE;
    match direction {
        Direction::Up => row != 0,
        Direction::Down => row != SIDE - 1,
        Direction::Left => column != 0,
        Direction::Right => column != SIDE - 1,
    }
}

fn build_position_moves<const SIDE: usize>(position: Position) -> PositionMoves {
    let legal: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|&direction| is_legal::<SIDE>(position, direction))
        .collect();

    let mut moves = PositionMoves::default();
    for &back in &legal {
        // arriving via the opposite of `back` means `back` walks straight back
        let remaining = legal
            .iter()
            .filter(|&&direction| direction != back)
            .map(|direction| direction.offset(SIDE))
            .collect();
        moves.insert(back.opposite().offset(SIDE), remaining);
    }
    moves.insert(0, legal.iter().map(|direction| direction.offset(SIDE)).collect());
    moves
}
