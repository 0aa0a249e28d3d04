//! Read-only views of a session.

use crate::{Difficulty, DifficultyProfile, SessionStats};
use derive_getters::Getters;
use serde::Serialize;

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Accepting guesses.
    #[default]
    #[strum(to_string = "in progress")]
    InProgress,
    /// The secret was guessed. Terminal.
    #[strum(to_string = "won")]
    Won,
    /// Attempts ran out. Terminal.
    #[strum(to_string = "lost")]
    Lost,
}

impl GameStatus {
    /// Whether the round has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Point-in-time view of a session for the presentation layer.
///
/// `revealed_secret` is `None` while the round is in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct StateSnapshot {
    /// Active difficulty.
    difficulty: Difficulty,
    /// Round status.
    status: GameStatus,
    /// Valid guesses made this round.
    attempts_used: u32,
    /// Attempt budget for this round.
    max_attempts: u32,
    /// Lower bound of the range.
    min_value: i64,
    /// Upper bound of the range.
    max_value: i64,
    /// Rounds started.
    games_played: u32,
    /// Rounds won.
    wins: u32,
    /// Fewest attempts in any win.
    best_attempts: Option<u32>,
    /// The secret, once the round is over.
    revealed_secret: Option<i64>,
}

impl StateSnapshot {
    pub(crate) fn new(
        profile: &DifficultyProfile,
        status: GameStatus,
        attempts_used: u32,
        stats: &SessionStats,
        revealed_secret: Option<i64>,
    ) -> Self {
        Self {
            difficulty: profile.difficulty(),
            status,
            attempts_used,
            max_attempts: profile.max_attempts(),
            min_value: profile.min_value(),
            max_value: profile.max_value(),
            games_played: *stats.games_played(),
            wins: *stats.wins(),
            best_attempts: *stats.best_attempts(),
            revealed_secret,
        }
    }

    /// Attempts left before the round is lost.
    pub fn attempts_remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts_used)
    }

    /// Whether the round has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}
