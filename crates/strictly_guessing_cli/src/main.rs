//! Strictly Guessing - terminal number-guessing game.

use anyhow::Result;
use clap::Parser;
use strictly_guessing::{DifficultyProfile, GameSession};
use strictly_guessing_cli::{Cli, GameLoop, GuessConfig, init_tracing};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GuessConfig::load(&cli.config)?.with_overrides(cli.difficulty, cli.log_filter);

    init_tracing(config.log_filter());
    info!(
        config_path = %cli.config.display(),
        difficulty = %config.difficulty(),
        "Starting Strictly Guessing"
    );

    let session = GameSession::start(DifficultyProfile::for_difficulty(*config.difficulty()));
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    GameLoop::new(session).run(stdin, stdout)
}
