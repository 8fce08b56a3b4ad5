//! Tic-tac-toe engine: board, rules, validation and sessions.

mod action;
mod phases;
mod position;
mod random_mover;
mod rules;
mod session;
mod types;
mod validation;

pub use action::{Move, MoveError};
pub use phases::{GameMode, GameOutcome, SessionState};
pub use position::{Cell, OccupiedCells};
pub use random_mover::RandomMover;
pub use rules::{WIN_LINES, has_won, is_full};
pub use session::{
    GameSession, SessionError, run_multiplayer_session, run_session, run_single_player_session,
};
pub use types::{Board, Mark, Side};
pub use validation::{MoveValidator, Rejection};
