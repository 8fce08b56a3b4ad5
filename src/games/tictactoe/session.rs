//! One complete game from empty board to outcome.
//!
//! A session alternates turns between two [`Player`]s, applies each move to
//! the board and checks for a win, then for a full board, after every move.

use super::action::{Move, MoveError};
use super::phases::{GameMode, GameOutcome, SessionState};
use super::random_mover::RandomMover;
use super::rules::{has_won, is_full};
use super::{Board, Cell, Side};
use crate::players::{HumanPlayer, Player};
use crate::terminal::{ConsoleError, Terminal};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Error that ends a session early.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// The terminal failed or ran out of input.
    #[display("{}", _0)]
    Console(ConsoleError),
    /// A player produced an illegal move.
    #[display("{}", _0)]
    Move(MoveError),
}

impl SessionError {
    /// Returns true if the session ended because input ran out.
    pub fn is_closed(&self) -> bool {
        matches!(self, SessionError::Console(e) if e.is_closed())
    }
}

/// A single game in progress or finished.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    state: SessionState,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a fresh session with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: SessionState::AwaitingMove(Side::X),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the turn owner's mark at `cell` and advances the state.
    ///
    /// A win is checked before a full board, so a ninth move that completes
    /// a line is a win. A full board ends the session at once; the other
    /// player is never asked to move.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn apply(&mut self, cell: Cell) -> Result<SessionState, MoveError> {
        let side = self.state.turn_owner().ok_or(MoveError::GameOver)?;
        let mark = side.mark();

        self.board.place(cell, mark)?;
        self.history.push(Move::new(mark, cell));
        debug!(?side, %cell, moves = self.history.len(), "Mark placed");

        self.state = if has_won(&self.board, mark) {
            SessionState::Finished(GameOutcome::win_for(side))
        } else if is_full(&self.board) {
            SessionState::Finished(GameOutcome::Tie)
        } else {
            SessionState::AwaitingMove(side.opponent())
        };

        Ok(self.state)
    }

    /// Plays the session to completion.
    ///
    /// `first` plays X, `second` plays O. The board is shown after every
    /// move.
    #[instrument(skip_all, fields(first = %first.name(), second = %second.name()))]
    pub fn run(
        mut self,
        first: &mut dyn Player,
        second: &mut dyn Player,
        terminal: &mut dyn Terminal,
    ) -> Result<GameOutcome, SessionError> {
        info!("Session started");
        loop {
            if let Some(outcome) = self.state.outcome() {
                info!(?outcome, moves = self.history.len(), "Session finished");
                return Ok(outcome);
            }

            let player: &mut dyn Player = match self.state.turn_owner() {
                Some(Side::O) => &mut *second,
                _ => &mut *first,
            };

            let cell = player.next_move(&self.board, terminal)?;
            self.apply(cell)?;
            terminal.say(&self.board.render())?;
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays one game of a human (X) against the random computer (O).
#[instrument(skip_all)]
pub fn run_single_player_session<R: Rng>(
    terminal: &mut dyn Terminal,
    rng: R,
) -> Result<GameOutcome, SessionError> {
    let mut human = HumanPlayer::new("You", "\nYour turn: ");
    let mut computer = RandomMover::new("Computer", rng);
    GameSession::new().run(&mut human, &mut computer, terminal)
}

/// Plays one game between two humans sharing the terminal.
#[instrument(skip_all)]
pub fn run_multiplayer_session(terminal: &mut dyn Terminal) -> Result<GameOutcome, SessionError> {
    terminal.say("\nPlayer 1 is X\nPlayer 2 is O\n")?;
    let mut player1 = HumanPlayer::new("Player 1", "\nPlayer 1's turn: ");
    let mut player2 = HumanPlayer::new("Player 2", "\nPlayer 2's turn: ");
    GameSession::new().run(&mut player1, &mut player2, terminal)
}

/// Plays one game in the given mode.
pub fn run_session<R: Rng>(
    mode: GameMode,
    terminal: &mut dyn Terminal,
    rng: R,
) -> Result<GameOutcome, SessionError> {
    match mode {
        GameMode::SinglePlayer => run_single_player_session(terminal, rng),
        GameMode::Multiplayer => run_multiplayer_session(terminal),
    }
}
