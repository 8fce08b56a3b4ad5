//! Terminal tic-tac-toe - command-line entry point.

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_tictactoe_cli::{Cli, Console, Shell, ShellConfig, Terminal, run_session};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = ShellConfig::load_or_default(&cli.config)?.with_seed_override(cli.seed);
    let rng = build_rng(*config.seed());
    let mut console = Console::stdio();

    match cli.mode {
        Some(mode) => {
            info!(%mode, "Playing a single game");
            let outcome = run_session(mode, &mut console, rng)?;
            console.say(outcome.message(mode))?;
        }
        None => Shell::new(config, rng).run(&mut console)?,
    }

    Ok(())
}

/// Seeded when asked, otherwise seeded from the thread-local generator.
#[instrument]
fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Logs go to stderr so they never mix with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
