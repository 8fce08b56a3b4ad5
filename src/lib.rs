//! Terminal tic-tac-toe.
//!
//! A 3x3 tic-tac-toe engine played over a line-based prompt, either against
//! a computer that picks free cells at random or between two people sharing
//! the keyboard.
//!
//! # Architecture
//!
//! - **Games**: board, win rules, move validation, random mover and the
//!   session state machine
//! - **Players**: the seam between a session and whoever supplies moves
//! - **Terminal**: line input and text output, swappable for tests
//! - **Shell**: the `-s`/`-m`/`-h`/`-i`/`-q` command loop
//!
//! # Example
//!
//! ```no_run
//! use strictly_tictactoe_cli::{Console, GameMode, run_multiplayer_session};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut console = Console::stdio();
//! let outcome = run_multiplayer_session(&mut console)?;
//! println!("{}", outcome.message(GameMode::Multiplayer));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod games;
mod messages;
mod players;
mod shell;
mod terminal;

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{ConfigError, ShellConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, GameMode, GameOutcome, GameSession, Mark, Move, MoveError, MoveValidator,
    OccupiedCells, RandomMover, Rejection, SessionError, SessionState, Side, WIN_LINES, has_won,
    is_full, run_multiplayer_session, run_session, run_single_player_session,
};

// Crate-level exports - Players
pub use players::{HumanPlayer, Player};

// Crate-level exports - Shell and terminal
pub use shell::{Shell, ShellCommand};
pub use terminal::{Console, ConsoleError, ConsoleErrorKind, Terminal};
