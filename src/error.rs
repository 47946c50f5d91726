//! Error types surfaced by board validation and the solver.

use thiserror::Error;

/// Everything that can go wrong before or during a solve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("board has {found} cells, expected {expected}")]
    WrongLength { expected: usize, found: usize },

    #[error("tile {value} is out of range for a board of {cells} cells")]
    OutOfRange { value: usize, cells: usize },

    #[error("tile {value} appears more than once")]
    Duplicate { value: u8 },

    #[error("invalid tile {0:?}")]
    InvalidToken(String),

    #[error("board is not solvable")]
    Unsolvable,

    /// The search ran out of nodes without reaching the goal.
    #[error("search space exhausted without reaching the goal")]
    Exhausted,
}
