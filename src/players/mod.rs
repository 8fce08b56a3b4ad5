//! Player trait and implementations.

mod computer;
mod human;

pub use human::HumanPlayer;

use crate::games::tictactoe::{Board, Cell, SessionError};
use crate::terminal::Terminal;

/// Anything that can supply moves to a session.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// The returned cell must be empty on `board`.
    fn next_move(&mut self, board: &Board, terminal: &mut dyn Terminal)
    -> Result<Cell, SessionError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
