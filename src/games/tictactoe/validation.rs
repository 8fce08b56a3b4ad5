//! Classification of raw cell selections.
//!
//! The validator is pure: it judges one line of input against the cells
//! already taken. Re-prompting on rejection belongs to whoever owns the
//! terminal (see [`HumanPlayer`](crate::HumanPlayer)).

use super::{Cell, OccupiedCells};
use std::num::IntErrorKind;
use tracing::{instrument, warn};

/// Why a raw selection was turned down.
///
/// The display text doubles as the re-prompt shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
pub enum Rejection {
    /// Input is not an integer.
    #[display("Invalid input. Please only type numbers while playing: ")]
    NotANumber,
    /// Integer outside 1-9.
    #[display("Invalid input. Only numbers from 1 to 9 are allowed: ")]
    OutOfRange,
    /// Cell already holds a mark.
    #[display("That cell is already filled. Choose another one: ")]
    CellTaken,
}

/// Validates player cell selections.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveValidator;

impl MoveValidator {
    /// Classifies `raw_input` against `occupied`.
    ///
    /// Checks run in a fixed order: not a number, then out of range, then
    /// taken. Numbers too large for `i64` are still numbers and count as
    /// out of range.
    #[instrument(skip(occupied))]
    pub fn validate(raw_input: &str, occupied: &OccupiedCells) -> Result<Cell, Rejection> {
        let number = match raw_input.trim().parse::<i64>() {
            Ok(number) => number,
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                warn!(raw_input, "Selection overflowed");
                return Err(Rejection::OutOfRange);
            }
            Err(_) => {
                warn!(raw_input, "Selection is not a number");
                return Err(Rejection::NotANumber);
            }
        };

        let cell = Cell::from_number(number).ok_or_else(|| {
            warn!(number, "Selection out of range");
            Rejection::OutOfRange
        })?;

        if occupied.contains(&cell) {
            warn!(%cell, "Selection already taken");
            return Err(Rejection::CellTaken);
        }

        Ok(cell)
    }
}
