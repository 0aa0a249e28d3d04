//! Strictly Guessing terminal front end
//!
//! Hosts a [`strictly_guessing::GameSession`] behind a line-oriented prompt.
//!
//! # Architecture
//!
//! - **Cli**: clap arguments (config path, difficulty, log filter)
//! - **Config**: TOML settings layered under the command-line flags
//! - **GameLoop**: reads commands and guesses, renders feedback
//! - **Render**: the text shown for each snapshot

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod game_loop;
mod logging;
pub mod render;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, GuessConfig};

// Crate-level exports - Game loop
pub use game_loop::{Command, GameLoop};

// Crate-level exports - Tracing
pub use logging::init_tracing;
