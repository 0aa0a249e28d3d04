//! Guess feedback and validation errors.

use serde::Serialize;

/// Classified feedback for a valid guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuessOutcome {
    /// The secret is larger; attempts remain.
    #[display("Too low! Try higher.")]
    TooLow,

    /// The secret is smaller; attempts remain.
    #[display("Too high! Try lower.")]
    TooHigh,

    /// The guess matched. Carries the attempts used this round.
    #[display("Correct! You guessed it in {} attempts.", attempts)]
    Correct {
        /// Attempts used, including the winning one.
        attempts: u32,
    },

    /// The last attempt missed. Carries the revealed secret.
    #[display("Game Over! The number was {}.", secret)]
    Exhausted {
        /// The secret for the round just lost.
        secret: i64,
    },
}

impl GuessOutcome {
    /// Whether this outcome ended the round.
    pub fn ends_round(&self) -> bool {
        matches!(self, Self::Correct { .. } | Self::Exhausted { .. })
    }
}

/// Reasons a submission is rejected without consuming an attempt.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The round is already won or lost.
    #[display("Game is over. Start a new game to play again.")]
    GameAlreadyOver,

    /// The input was blank.
    #[display("Please enter a number.")]
    EmptyInput,

    /// The input was not an integer. Carries the trimmed input.
    #[display("Please enter a valid integer.")]
    NotAnInteger(String),

    /// The guess lies outside the active profile's range.
    #[display("Your guess must be between {} and {}.", min, max)]
    OutOfRange {
        /// The rejected guess.
        guess: i64,
        /// Lower bound of the range.
        min: i64,
        /// Upper bound of the range.
        max: i64,
    },
}

impl std::error::Error for GuessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_messages() {
        assert_eq!(GuessOutcome::TooLow.to_string(), "Too low! Try higher.");
        assert_eq!(GuessOutcome::TooHigh.to_string(), "Too high! Try lower.");
        assert_eq!(
            GuessOutcome::Correct { attempts: 3 }.to_string(),
            "Correct! You guessed it in 3 attempts."
        );
        assert_eq!(
            GuessOutcome::Exhausted { secret: 10 }.to_string(),
            "Game Over! The number was 10."
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(GuessError::EmptyInput.to_string(), "Please enter a number.");
        assert_eq!(
            GuessError::NotAnInteger("abc".into()).to_string(),
            "Please enter a valid integer."
        );
        assert_eq!(
            GuessError::OutOfRange { guess: 0, min: 1, max: 100 }.to_string(),
            "Your guess must be between 1 and 100."
        );
    }

    #[test]
    fn test_only_terminal_outcomes_end_round() {
        assert!(!GuessOutcome::TooLow.ends_round());
        assert!(!GuessOutcome::TooHigh.ends_round());
        assert!(GuessOutcome::Correct { attempts: 1 }.ends_round());
        assert!(GuessOutcome::Exhausted { secret: 1 }.ends_round());
    }

    #[test]
    fn test_outcome_serializes_with_kind_tag() {
        let json = serde_json::to_value(GuessOutcome::Correct { attempts: 4 }).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "correct", "attempts": 4 }));
    }
}
