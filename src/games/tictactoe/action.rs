//! Moves as first-class domain events.

use super::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a mark placed in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it goes.
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, cell: Cell) -> Self {
        Self { mark, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.mark, self.cell)
    }
}

/// Error raised when a move cannot be applied.
///
/// These indicate a bug in the caller: validated input never produces them.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell is already occupied, or no real mark was given.
    #[display("Invalid move at cell {}", _0)]
    InvalidMove(#[error(not(source))] Cell),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}
