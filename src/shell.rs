//! Interactive command loop around the game sessions.

use crate::config::ShellConfig;
use crate::games::tictactoe::{GameMode, SessionError, run_session};
use crate::messages::{
    COMMANDS, FAREWELL, GAME_GUIDE, NEXT_COMMAND_PROMPT, START_MESSAGE, UNKNOWN_COMMAND,
};
use crate::terminal::Terminal;
use rand::Rng;
use std::ops::ControlFlow;
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// Commands understood at the shell prompt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::EnumIter,
)]
pub enum ShellCommand {
    /// Start a single-player game.
    #[strum(serialize = "-s")]
    SinglePlayer,
    /// Start a multiplayer game.
    #[strum(serialize = "-m")]
    Multiplayer,
    /// Show the command list.
    #[strum(serialize = "-h")]
    Help,
    /// Show the how-to-play guide.
    #[strum(serialize = "-i")]
    Guide,
    /// Leave the shell.
    #[strum(serialize = "-q")]
    Quit,
}

impl ShellCommand {
    /// Parses a typed command, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::from_str(&raw.trim().to_lowercase()).ok()
    }
}

/// The command loop: reads commands, runs games, prints results.
#[derive(Debug)]
pub struct Shell<R> {
    config: ShellConfig,
    rng: R,
}

impl<R: Rng> Shell<R> {
    /// Creates a shell using `rng` for every single-player game.
    pub fn new(config: ShellConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Runs until `-q` or end of input.
    ///
    /// End of input at a command prompt ends the shell quietly. End of input
    /// in the middle of a game is returned as an error.
    #[instrument(skip_all)]
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<(), SessionError> {
        if *self.config.show_guide() {
            terminal.say(GAME_GUIDE)?;
        }
        terminal.say(START_MESSAGE)?;

        let mut prompt = self.config.command_prompt().clone();
        loop {
            let raw = match terminal.prompt(&prompt) {
                Ok(raw) => raw,
                Err(e) if e.is_closed() => {
                    info!("Input closed at command prompt");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

            if self.dispatch(ShellCommand::parse(&raw), terminal)?.is_break() {
                return Ok(());
            }
            prompt = NEXT_COMMAND_PROMPT.to_string();
        }
    }

    /// Handles one command.
    #[instrument(skip(self, terminal))]
    fn dispatch(
        &mut self,
        command: Option<ShellCommand>,
        terminal: &mut dyn Terminal,
    ) -> Result<ControlFlow<()>, SessionError> {
        match command {
            Some(ShellCommand::SinglePlayer) => self.play(GameMode::SinglePlayer, terminal)?,
            Some(ShellCommand::Multiplayer) => self.play(GameMode::Multiplayer, terminal)?,
            Some(ShellCommand::Help) => terminal.say(COMMANDS)?,
            Some(ShellCommand::Guide) => terminal.say(GAME_GUIDE)?,
            Some(ShellCommand::Quit) => {
                terminal.say(FAREWELL)?;
                return Ok(ControlFlow::Break(()));
            }
            None => {
                warn!("Unknown command");
                terminal.say(UNKNOWN_COMMAND)?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Plays one game and announces the result.
    #[instrument(skip(self, terminal))]
    fn play(&mut self, mode: GameMode, terminal: &mut dyn Terminal) -> Result<(), SessionError> {
        let outcome = run_session(mode, terminal, &mut self.rng)?;
        info!(%mode, result = outcome.label(mode), "Game over");
        terminal.say(outcome.message(mode))?;
        Ok(())
    }
}
