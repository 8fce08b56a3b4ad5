//! Computer opponent backed by [`RandomMover`].

use super::Player;
use crate::games::tictactoe::{Board, Cell, MoveError, RandomMover, SessionError};
use crate::terminal::Terminal;
use rand::Rng;
use tracing::instrument;

impl<R: Rng> Player for RandomMover<R> {
    #[instrument(skip(self, board, terminal), fields(player = %self.name()))]
    fn next_move(
        &mut self,
        board: &Board,
        terminal: &mut dyn Terminal,
    ) -> Result<Cell, SessionError> {
        let cell = self
            .choose(&board.occupied_cells())
            .ok_or(MoveError::GameOver)?;
        terminal.say(&format!("\n{}'s turn:", self.name()))?;
        Ok(cell)
    }

    fn name(&self) -> &str {
        RandomMover::name(self)
    }
}
