//! Text rendering of session snapshots.

use strictly_guessing::StateSnapshot;

/// Title line printed on launch.
pub const BANNER: &str = "Number Guessing Game";

/// Command summary printed by `help`.
pub const HELP: &str = "\
Type a number to guess. Commands:
  new                      start a new game
  easy | normal | hard     switch difficulty (starts a new game)
  difficulty <name>        same as above
  stats                    show games played, wins and best game
  state                    show the current state as JSON
  help                     show this message
  quit                     leave the game";

/// `"Difficulty: Normal (1-100)"`.
pub fn difficulty_line(snapshot: &StateSnapshot) -> String {
    format!("Difficulty: {}", snapshot.difficulty().label())
}

/// `"Range: 1 to 100 | Max attempts: 10"`.
pub fn range_line(snapshot: &StateSnapshot) -> String {
    format!(
        "Range: {} to {} | Max attempts: {}",
        snapshot.min_value(),
        snapshot.max_value(),
        snapshot.max_attempts()
    )
}

/// Prompt shown whenever a round starts.
pub fn new_game_line(snapshot: &StateSnapshot) -> String {
    format!(
        "New game started! Guess a number between {} and {}.",
        snapshot.min_value(),
        snapshot.max_value()
    )
}

/// `"Attempts: 3 / 10"`.
pub fn attempts_line(snapshot: &StateSnapshot) -> String {
    format!(
        "Attempts: {} / {}",
        snapshot.attempts_used(),
        snapshot.max_attempts()
    )
}

/// `"Games played: 2 | Wins: 1 | Best game: 3 attempts"`.
pub fn stats_line(snapshot: &StateSnapshot) -> String {
    let best = match snapshot.best_attempts() {
        Some(best) => format!("{} attempts", best),
        None => "N/A".to_string(),
    };
    format!(
        "Games played: {} | Wins: {} | Best game: {}",
        snapshot.games_played(),
        snapshot.wins(),
        best
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_guessing::{Difficulty, DifficultyProfile, GameSession, ScriptedSecrets};

    fn snapshot_after(guesses: &[&str]) -> StateSnapshot {
        let mut session = GameSession::with_source(
            DifficultyProfile::for_difficulty(Difficulty::Normal),
            ScriptedSecrets::new([42]),
        );
        for guess in guesses {
            let _ = session.submit_guess(guess);
        }
        session.current_state()
    }

    #[test]
    fn test_round_lines() {
        let snapshot = snapshot_after(&["10"]);
        assert_eq!(difficulty_line(&snapshot), "Difficulty: Normal (1-100)");
        assert_eq!(range_line(&snapshot), "Range: 1 to 100 | Max attempts: 10");
        assert_eq!(
            new_game_line(&snapshot),
            "New game started! Guess a number between 1 and 100."
        );
        assert_eq!(attempts_line(&snapshot), "Attempts: 1 / 10");
    }

    #[test]
    fn test_stats_line_before_and_after_win() {
        assert_eq!(
            stats_line(&snapshot_after(&[])),
            "Games played: 1 | Wins: 0 | Best game: N/A"
        );
        assert_eq!(
            stats_line(&snapshot_after(&["50", "42"])),
            "Games played: 1 | Wins: 1 | Best game: 2 attempts"
        );
    }
}
