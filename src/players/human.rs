//! Human player reading cell numbers from the terminal.

use super::Player;
use crate::games::tictactoe::{Board, Cell, MoveValidator, SessionError};
use crate::terminal::Terminal;
use tracing::{debug, info, instrument};

/// Human player typing cell numbers at a prompt.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
    turn_prompt: String,
}

impl HumanPlayer {
    /// Creates a new human player asked for moves with `turn_prompt`.
    pub fn new(name: impl Into<String>, turn_prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            turn_prompt: turn_prompt.into(),
        }
    }
}

impl Player for HumanPlayer {
    /// Prompts until the player names a free cell.
    ///
    /// Each rejected line is answered with the rejection's own message and
    /// another read. There is no attempt limit.
    #[instrument(skip(self, board, terminal), fields(player = %self.name))]
    fn next_move(
        &mut self,
        board: &Board,
        terminal: &mut dyn Terminal,
    ) -> Result<Cell, SessionError> {
        let occupied = board.occupied_cells();
        let mut raw = terminal.prompt(&self.turn_prompt)?;
        let mut attempts = 1_u32;

        loop {
            match MoveValidator::validate(&raw, &occupied) {
                Ok(cell) => {
                    info!(%cell, attempts, "Human chose cell");
                    return Ok(cell);
                }
                Err(rejection) => {
                    debug!(?rejection, attempts, "Re-prompting");
                    raw = terminal.prompt(&rejection.to_string())?;
                    attempts += 1;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
