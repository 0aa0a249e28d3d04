//! Line-oriented game loop.
//!
//! Reads one line at a time, treats anything that is not a command as a
//! guess, and writes the rendered feedback back out.

use crate::render;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_guessing::{Difficulty, GameSession, RandomSecret, SecretSource};
use tracing::{debug, info, instrument};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit the raw line as a guess.
    Guess(String),
    /// Start a new round at the current difficulty.
    NewGame,
    /// Switch difficulty by name and start a new round.
    SetDifficulty(String),
    /// Print running statistics.
    Stats,
    /// Print the snapshot as JSON.
    State,
    /// Print the command summary.
    Help,
    /// Leave the loop.
    Quit,
}

impl Command {
    /// Classifies a line. Command words are case-insensitive.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let lowered = trimmed.to_ascii_lowercase();
        match lowered.as_str() {
            "new" | "new game" => Self::NewGame,
            "easy" | "normal" | "hard" => Self::SetDifficulty(lowered),
            "stats" => Self::Stats,
            "state" => Self::State,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => match lowered.strip_prefix("difficulty ") {
                Some(name) => Self::SetDifficulty(name.trim().to_string()),
                None => Self::Guess(line.to_string()),
            },
        }
    }
}

/// Drives a [`GameSession`] from text input.
#[derive(Debug)]
pub struct GameLoop<S = RandomSecret> {
    session: GameSession<S>,
}

impl<S: SecretSource> GameLoop<S> {
    /// Wraps a session whose first round has already started.
    pub fn new(session: GameSession<S>) -> Self {
        Self { session }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", render::BANNER)?;
        self.announce_round(&mut output)?;
        writeln!(output, "Type 'help' for commands.")?;
        prompt(&mut output)?;

        // Decoded lossily: invalid UTF-8 reaches the session as a non-integer guess.
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Failed to read input")?;
            if read == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&buf);
            let line = text.trim_end_matches(['\n', '\r']);
            let command = Command::parse(line);
            debug!(?command, "Command received");

            if command == Command::Quit {
                break;
            }
            self.execute(command, &mut output)?;
            prompt(&mut output)?;
        }

        let snapshot = self.session.current_state();
        writeln!(output)?;
        writeln!(output, "{}", render::stats_line(&snapshot))?;
        writeln!(output, "Goodbye!")?;
        output.flush().context("Failed to flush output")?;
        info!(
            games_played = *snapshot.games_played(),
            wins = *snapshot.wins(),
            "Game loop finished"
        );
        Ok(())
    }

    /// Applies one command and writes its feedback.
    #[instrument(skip(self, output))]
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<()> {
        match command {
            Command::Guess(raw) => match self.session.submit_guess(&raw) {
                Ok(outcome) => {
                    let snapshot = self.session.current_state();
                    writeln!(output, "{}", outcome)?;
                    writeln!(output, "{}", render::attempts_line(&snapshot))?;
                    if outcome.ends_round() {
                        writeln!(output, "{}", render::stats_line(&snapshot))?;
                        writeln!(output, "Type 'new' to play again.")?;
                    }
                }
                Err(error) => writeln!(output, "{}", error)?,
            },
            Command::NewGame => {
                self.session.restart();
                self.announce_round(output)?;
            }
            Command::SetDifficulty(name) => match Difficulty::from_name(&name) {
                Ok(difficulty) => {
                    self.session.change_difficulty(difficulty);
                    self.announce_round(output)?;
                }
                Err(error) => writeln!(output, "{}", error)?,
            },
            Command::Stats => {
                writeln!(output, "{}", render::stats_line(&self.session.current_state()))?;
            }
            Command::State => {
                let json = serde_json::to_string_pretty(&self.session.current_state())
                    .context("Failed to serialize state")?;
                writeln!(output, "{}", json)?;
            }
            Command::Help => writeln!(output, "{}", render::HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn announce_round<W: Write>(&self, output: &mut W) -> Result<()> {
        let snapshot = self.session.current_state();
        writeln!(output, "{}", render::difficulty_line(&snapshot))?;
        writeln!(output, "{}", render::range_line(&snapshot))?;
        writeln!(output, "{}", render::new_game_line(&snapshot))?;
        Ok(())
    }
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "> ")?;
    output.flush().context("Failed to flush output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("new"), Command::NewGame);
        assert_eq!(Command::parse(" NEW GAME "), Command::NewGame);
        assert_eq!(Command::parse("Hard"), Command::SetDifficulty("hard".into()));
        assert_eq!(
            Command::parse("difficulty Easy"),
            Command::SetDifficulty("easy".into())
        );
        assert_eq!(Command::parse("stats"), Command::Stats);
        assert_eq!(Command::parse("state"), Command::State);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("exit"), Command::Quit);
    }

    #[test]
    fn test_everything_else_is_a_guess() {
        assert_eq!(Command::parse("42"), Command::Guess("42".into()));
        assert_eq!(Command::parse(""), Command::Guess(String::new()));
        assert_eq!(Command::parse("abc"), Command::Guess("abc".into()));
    }
}
