//! Strictly Guessing - number-guessing game logic
//!
//! The program picks a secret integer in a difficulty-dependent range and the
//! player guesses until they hit it or run out of attempts.
//!
//! # Architecture
//!
//! - **Difficulty**: three fixed profiles (range bounds, attempt budget)
//! - **Session**: round state machine plus cross-round statistics
//! - **Contracts**: precondition checks that decide whether a guess costs an
//!   attempt, and debug-build postconditions on every transition
//! - **Secret**: the randomness seam (CSPRNG by default, scripted for tests)
//!
//! # Example
//!
//! ```
//! use strictly_guessing::{
//!     Difficulty, DifficultyProfile, GameSession, GameStatus, GuessOutcome, ScriptedSecrets,
//! };
//!
//! let profile = DifficultyProfile::for_difficulty(Difficulty::Normal);
//! let mut session = GameSession::with_source(profile, ScriptedSecrets::new([42]));
//!
//! assert_eq!(session.submit_guess("50"), Ok(GuessOutcome::TooHigh));
//! assert_eq!(session.submit_guess("42"), Ok(GuessOutcome::Correct { attempts: 2 }));
//! assert_eq!(session.status(), GameStatus::Won);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod difficulty;
mod guess;
mod secret;
mod session;
mod snapshot;
mod stats;

// Crate-level exports - Difficulty
pub use difficulty::{Difficulty, DifficultyError, DifficultyProfile};

// Crate-level exports - Guess feedback
pub use guess::{GuessError, GuessOutcome};

// Crate-level exports - Randomness
pub use secret::{RandomSecret, ScriptedSecrets, SecretSource};

// Crate-level exports - Session
pub use session::GameSession;
pub use snapshot::{GameStatus, StateSnapshot};
pub use stats::SessionStats;
