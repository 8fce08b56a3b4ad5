//! Command-line interface for the tic-tac-toe shell.

use crate::games::tictactoe::GameMode;
use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe against a friend or a random computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe, single player or two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults used if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Seed for the computer opponent (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play a single game in this mode and exit instead of starting the shell
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,
}
