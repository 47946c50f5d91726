//! Random start positions.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Offset, Tile};
use crate::moves::MoveTable;

/// Shuffles the tiles uniformly until the arrangement is solvable.
pub fn scramble<const SIDE: usize, const CELLS: usize, R: Rng + ?Sized>(
    rng: &mut R,
) -> Board<SIDE, CELLS> {
    let mut tiles: Vec<Tile> = Board::<SIDE, CELLS>::solved().tiles().to_vec();

    loop {
        tiles.shuffle(rng);
        if let Ok(board) = Board::from_slice(&tiles) {
            if board.is_solvable() {
                return board;
            }
        }
    }
}

/// Walks the blank `steps` random slides away from the goal, never undoing
/// the previous slide.
///
/// `visit` sees the board after every slide. Returns the final board.
pub fn walk<const SIDE: usize, const CELLS: usize, R, F>(
    rng: &mut R,
    steps: usize,
    mut visit: F,
) -> Board<SIDE, CELLS>
where
    R: Rng + ?Sized,
    F: FnMut(&Board<SIDE, CELLS>),
{
    let moves = MoveTable::<SIDE, CELLS>::new();
    let mut board = Board::<SIDE, CELLS>::solved();
    let mut blank = board.blank();
    let mut previous: Offset = 0;

    for _ in 0..steps {
        let Some(&offset) = moves.legal_moves(blank, previous).choose(rng) else {
            break;
        };
        blank = blank.wrapping_add_signed(offset);
        board.slide_blank(blank);
        previous = offset;
        visit(&board);
    }

    board
}

/// A board `steps` random slides away from the goal (at most `steps` moves
/// to solve).
pub fn random_walk<const SIDE: usize, const CELLS: usize, R: Rng + ?Sized>(
    rng: &mut R,
    steps: usize,
) -> Board<SIDE, CELLS> {
    walk(rng, steps, |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scramble_is_solvable() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let board: Board<3, 9> = scramble(&mut rng);
            assert!(board.is_solvable());
            let board: Board<4, 16> = scramble(&mut rng);
            assert!(board.is_solvable());
        }
    }

    #[test]
    fn test_scramble_is_reproducible_from_seed() {
        let first: Board<4, 16> = scramble(&mut StdRng::seed_from_u64(42));
        let second: Board<4, 16> = scramble(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_walk_visits_adjacent_boards() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut visited = vec![Board::<3, 9>::solved()];
        let last = walk(&mut rng, 40, |board: &Board<3, 9>| visited.push(*board));

        assert_eq!(visited.len(), 41);
        assert_eq!(visited.last(), Some(&last));
        for pair in visited.windows(2) {
            let (from, to) = (pair[0].blank(), pair[1].blank());
            let step = from.abs_diff(to);
            assert!(step == 1 || step == 3, "{from} -> {to}");
            assert!(pair[1].is_solvable());
        }
        // never steps straight back
        for triple in visited.windows(3) {
            assert_ne!(triple[0], triple[2]);
        }
    }

    #[test]
    fn test_random_walk_of_zero_steps_is_solved() {
        let board: Board<4, 16> = random_walk(&mut StdRng::seed_from_u64(1), 0);
        assert!(board.is_solved());
    }
}
