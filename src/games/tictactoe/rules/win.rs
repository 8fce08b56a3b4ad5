//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use tracing::instrument;

/// The 8 winning lines: rows, columns, then diagonals.
pub const WIN_LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Checks whether `mark` owns all three cells of any winning line.
///
/// `Mark::Empty` never wins.
#[instrument(skip(board))]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    let owned = board.cells_marked(mark);
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|cell| owned.contains(cell)))
}
