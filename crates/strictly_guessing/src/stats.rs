//! Statistics that survive across rounds of one session.

use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Running totals for a session.
///
/// Read-only outside the crate; only a session records rounds and wins.
///
/// ```compile_fail
/// let mut stats = strictly_guessing::SessionStats::new();
/// stats.record_win(1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Getters)]
pub struct SessionStats {
    /// Rounds started, including the current one.
    games_played: u32,
    /// Rounds won.
    wins: u32,
    /// Fewest attempts in any won round. `None` until the first win.
    best_attempts: Option<u32>,
}

impl SessionStats {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a newly started round.
    #[instrument(skip(self))]
    pub(crate) fn record_round_started(&mut self) {
        self.games_played += 1;
        debug!(games_played = self.games_played, "Round counted");
    }

    /// Counts a win that took `attempts` guesses.
    ///
    /// `best_attempts` only ever moves down.
    #[instrument(skip(self))]
    pub(crate) fn record_win(&mut self, attempts: u32) {
        self.wins += 1;
        self.best_attempts = Some(self.best_attempts.map_or(attempts, |best| best.min(attempts)));
        debug!(wins = self.wins, best_attempts = ?self.best_attempts, "Win recorded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_attempts_starts_empty() {
        let stats = SessionStats::new();
        assert_eq!(*stats.best_attempts(), None);
        assert_eq!(*stats.games_played(), 0);
        assert_eq!(*stats.wins(), 0);
    }

    #[test]
    fn test_best_attempts_never_increases() {
        let mut stats = SessionStats::new();
        stats.record_round_started();
        stats.record_win(5);
        assert_eq!(*stats.best_attempts(), Some(5));

        stats.record_round_started();
        stats.record_win(3);
        assert_eq!(*stats.best_attempts(), Some(3));

        stats.record_round_started();
        stats.record_win(7);
        assert_eq!(*stats.best_attempts(), Some(3));
        assert_eq!(*stats.wins(), 3);
    }
}
