//! Session phases, outcomes and game modes.

use super::Side;
use serde::{Deserialize, Serialize};

/// Terminal outcome of a session, independent of game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// X completed a line.
    FirstPlayerWin,
    /// O completed a line.
    SecondPlayerWin,
    /// The board filled up with no line completed.
    Tie,
}

impl GameOutcome {
    /// The outcome of `side` completing a line.
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::X => GameOutcome::FirstPlayerWin,
            Side::O => GameOutcome::SecondPlayerWin,
        }
    }

    /// Short label for this outcome in the given mode.
    pub fn label(&self, mode: GameMode) -> &'static str {
        match (mode, self) {
            (GameMode::SinglePlayer, GameOutcome::FirstPlayerWin) => "user",
            (GameMode::SinglePlayer, GameOutcome::SecondPlayerWin) => "ai",
            (GameMode::Multiplayer, GameOutcome::FirstPlayerWin) => "player1",
            (GameMode::Multiplayer, GameOutcome::SecondPlayerWin) => "player2",
            (_, GameOutcome::Tie) => "tie",
        }
    }

    /// Message announcing this outcome in the given mode.
    pub fn message(&self, mode: GameMode) -> &'static str {
        match (mode, self) {
            (GameMode::SinglePlayer, GameOutcome::FirstPlayerWin) => "You won! Congrats 🎉",
            (GameMode::SinglePlayer, GameOutcome::SecondPlayerWin) => "Computer won, too bad 😔",
            (GameMode::Multiplayer, GameOutcome::FirstPlayerWin) => "Player 1 won, Congrats 🎉",
            (GameMode::Multiplayer, GameOutcome::SecondPlayerWin) => {
                "Player 2 won, Great game! 💪"
            }
            (_, GameOutcome::Tie) => "Looks like it's a tie this time 🤷",
        }
    }
}

/// Who sits on the O side of the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
pub enum GameMode {
    /// Human X against the random computer O.
    #[strum(serialize = "single")]
    #[value(name = "single")]
    SinglePlayer,
    /// Two humans sharing the terminal.
    #[strum(serialize = "multi")]
    #[value(name = "multi")]
    Multiplayer,
}

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the given side to move.
    AwaitingMove(Side),
    /// The session is over. Absorbing.
    Finished(GameOutcome),
}

impl SessionState {
    /// Returns the outcome once finished.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            SessionState::Finished(outcome) => Some(*outcome),
            SessionState::AwaitingMove(_) => None,
        }
    }

    /// Returns the side to move, if the session is still running.
    pub fn turn_owner(&self) -> Option<Side> {
        match self {
            SessionState::AwaitingMove(side) => Some(*side),
            SessionState::Finished(_) => None,
        }
    }
}
