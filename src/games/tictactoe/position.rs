//! Cell identifiers for the 3x3 grid.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// One of the nine grid cells, numbered 1-9 in row-major order.
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (cell 1)
    TopLeft = 1,
    /// Top-center (cell 2)
    TopCenter = 2,
    /// Top-right (cell 3)
    TopRight = 3,
    /// Middle-left (cell 4)
    MiddleLeft = 4,
    /// Center (cell 5)
    Center = 5,
    /// Middle-right (cell 6)
    MiddleRight = 6,
    /// Bottom-left (cell 7)
    BottomLeft = 7,
    /// Bottom-center (cell 8)
    BottomCenter = 8,
    /// Bottom-right (cell 9)
    BottomRight = 9,
}

/// Cells currently holding a mark.
///
/// Always derived from a [`Board`](super::Board), never stored on its own.
pub type OccupiedCells = BTreeSet<Cell>;

impl Cell {
    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// The number a player types to pick this cell (1-9).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based board index (0-8).
    pub fn index(self) -> usize {
        usize::from(self.number()) - 1
    }

    /// Looks up a cell by its 1-9 number.
    #[instrument]
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1..=9 => Self::ALL.get(usize::try_from(number - 1).ok()?).copied(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}
