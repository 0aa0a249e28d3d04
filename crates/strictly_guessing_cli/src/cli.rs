//! Command-line interface for strictly_guessing.

use clap::Parser;
use std::path::PathBuf;
use strictly_guessing::{Difficulty, DifficultyError};

/// Strictly Guessing - guess the secret number before your attempts run out
#[derive(Parser, Debug)]
#[command(name = "strictly_guessing")]
#[command(about = "Number-guessing game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = "strictly_guessing.toml")]
    pub config: PathBuf,

    /// Starting difficulty: easy (1-50), normal (1-100) or hard (1-500)
    #[arg(short, long, value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,

    /// Tracing filter used when RUST_LOG is unset (e.g. "info")
    #[arg(long)]
    pub log_filter: Option<String>,
}

fn parse_difficulty(name: &str) -> Result<Difficulty, DifficultyError> {
    Difficulty::from_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["strictly_guessing"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("strictly_guessing.toml"));
        assert_eq!(cli.difficulty, None);
        assert_eq!(cli.log_filter, None);
    }

    #[test]
    fn test_difficulty_flag_is_case_insensitive() {
        let cli = Cli::try_parse_from(["strictly_guessing", "--difficulty", "HARD"]).unwrap();
        assert_eq!(cli.difficulty, Some(Difficulty::Hard));

        let cli = Cli::try_parse_from(["strictly_guessing", "-d", "easy"]).unwrap();
        assert_eq!(cli.difficulty, Some(Difficulty::Easy));
    }

    #[test]
    fn test_unknown_difficulty_flag_fails() {
        assert!(Cli::try_parse_from(["strictly_guessing", "-d", "nightmare"]).is_err());
    }
}
