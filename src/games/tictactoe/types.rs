//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::{Cell, OccupiedCells};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The token occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// No mark yet.
    #[default]
    Empty,
    /// Player X (moves first).
    PlayerX,
    /// Player O (moves second).
    PlayerO,
}

impl Mark {
    /// How the mark is drawn inside a grid cell.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Empty => "[]",
            Mark::PlayerX => "[X]",
            Mark::PlayerO => "[O]",
        }
    }
}

/// One of the two sides taking turns. Unlike [`Mark`], never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Moves first.
    X,
    /// Moves second.
    O,
}

impl Side {
    /// The mark this side places.
    pub fn mark(self) -> Mark {
        match self {
            Side::X => Mark::PlayerX,
            Side::O => Mark::PlayerO,
        }
    }

    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Marks in row-major order, indexed by [`Cell::index`].
    cells: [Mark; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; 9],
        }
    }

    /// Gets the mark at the given cell.
    pub fn get(&self, cell: Cell) -> Mark {
        self.cells[cell.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Mark::Empty
    }

    /// Places a mark on an empty cell.
    ///
    /// A cell is written exactly once. Overwriting an occupied cell, or
    /// "placing" [`Mark::Empty`], is a caller bug and is refused.
    #[instrument(skip(self))]
    pub fn place(&mut self, cell: Cell, mark: Mark) -> Result<(), MoveError> {
        if mark == Mark::Empty || !self.is_empty(cell) {
            return Err(MoveError::InvalidMove(cell));
        }
        self.cells[cell.index()] = mark;
        Ok(())
    }

    /// Cells currently holding the given mark.
    pub fn cells_marked(&self, mark: Mark) -> OccupiedCells {
        Cell::ALL
            .into_iter()
            .filter(|&cell| self.get(cell) == mark)
            .collect()
    }

    /// Cells holding any mark.
    pub fn occupied_cells(&self) -> OccupiedCells {
        Cell::ALL
            .into_iter()
            .filter(|&cell| !self.is_empty(cell))
            .collect()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&mark| mark != Mark::Empty)
    }

    /// Formats the board as three rows of bracketed cells.
    pub fn render(&self) -> String {
        self.cells
            .chunks(3)
            .map(|row| {
                let row = row.iter().map(|m| m.symbol()).collect::<Vec<_>>().join(" ");
                format!(" {}", row)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
