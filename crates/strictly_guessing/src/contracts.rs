//! Contract-based validation for guessing rounds.
//!
//! Preconditions decide whether a submission may consume an attempt.
//! Postconditions check the round after a transition and run in debug
//! builds only.

use crate::session::RoundState;
use crate::{GameStatus, GuessError};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for one kind of state transition.
pub trait Contract<S, A: ?Sized> {
    /// What a passing precondition hands to the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, GuessError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

/// A postcondition that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violation: {}", description)]
pub struct InvariantViolation {
    /// Which invariants failed.
    pub description: String,
}

impl std::error::Error for InvariantViolation {}

impl InvariantViolation {
    fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round must still be in progress.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Rejects guesses against a won or lost round.
    #[instrument(skip(state))]
    pub fn check(state: &RoundState) -> Result<(), GuessError> {
        if state.status.is_terminal() {
            Err(GuessError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the input must not be blank.
pub struct InputNotEmpty;

impl InputNotEmpty {
    /// Returns the trimmed input.
    #[instrument]
    pub fn check(raw: &str) -> Result<&str, GuessError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(GuessError::EmptyInput)
        } else {
            Ok(trimmed)
        }
    }
}

/// Precondition: the input must parse as an integer.
pub struct ParsesAsInteger;

impl ParsesAsInteger {
    /// Parses already-trimmed input as a 32-bit integer.
    ///
    /// Text beyond the `i32` range is not an integer at all, so it never
    /// reaches the range check.
    #[instrument]
    pub fn check(trimmed: &str) -> Result<i64, GuessError> {
        trimmed
            .parse::<i32>()
            .map(i64::from)
            .map_err(|_| GuessError::NotAnInteger(trimmed.to_string()))
    }
}

/// Precondition: the guess must lie within the active profile's range.
pub struct WithinRange;

impl WithinRange {
    /// Rejects guesses outside `[min_value, max_value]`.
    #[instrument(skip(state))]
    pub fn check(guess: i64, state: &RoundState) -> Result<(), GuessError> {
        if state.profile.contains(guess) {
            Ok(())
        } else {
            Err(GuessError::OutOfRange {
                guess,
                min: state.profile.min_value(),
                max: state.profile.max_value(),
            })
        }
    }
}

/// Composite precondition: all guess checks, in submission order.
pub struct ValidGuess;

impl ValidGuess {
    /// Validates raw input and returns the parsed guess.
    #[instrument(skip(state))]
    pub fn check(raw: &str, state: &RoundState) -> Result<i64, GuessError> {
        RoundInProgress::check(state)?;
        let trimmed = InputNotEmpty::check(raw)?;
        let guess = ParsesAsInteger::check(trimmed)?;
        WithinRange::check(guess, state)?;
        Ok(guess)
    }
}

// ─────────────────────────────────────────────────────────────
//  Round Invariants
// ─────────────────────────────────────────────────────────────

/// Invariant: the secret lies in the profile's range.
pub struct SecretInRange;

impl SecretInRange {
    /// Whether the invariant holds.
    pub fn holds(state: &RoundState) -> bool {
        let valid = state.profile.contains(state.secret);
        if !valid {
            warn!(difficulty = %state.profile.difficulty(), "Secret outside profile range");
        }
        valid
    }
}

/// Invariant: attempts never exceed the budget.
pub struct AttemptsWithinBudget;

impl AttemptsWithinBudget {
    /// Whether the invariant holds.
    pub fn holds(state: &RoundState) -> bool {
        let valid = state.attempts_used <= state.profile.max_attempts();
        if !valid {
            warn!(
                attempts_used = state.attempts_used,
                max_attempts = state.profile.max_attempts(),
                "Attempt budget exceeded"
            );
        }
        valid
    }
}

/// Invariant: statistics are internally consistent with the round.
pub struct StatsConsistent;

impl StatsConsistent {
    /// Whether the invariant holds.
    pub fn holds(state: &RoundState) -> bool {
        let stats = &state.stats;
        let valid = stats.wins() <= stats.games_played()
            && *stats.games_played() > 0
            && (state.status != GameStatus::Won || stats.best_attempts().is_some());
        if !valid {
            warn!(?stats, status = %state.status, "Statistics inconsistent");
        }
        valid
    }
}

/// Collects descriptions of every round invariant that fails.
#[instrument(skip(state))]
fn violated_invariants(state: &RoundState) -> Vec<&'static str> {
    let mut violations = Vec::new();
    if !SecretInRange::holds(state) {
        violations.push("secret outside range");
    }
    if !AttemptsWithinBudget::holds(state) {
        violations.push("attempts exceed budget");
    }
    if !StatsConsistent::holds(state) {
        violations.push("statistics inconsistent");
    }
    violations
}

fn check_invariants(state: &RoundState) -> Result<(), InvariantViolation> {
    let violations = violated_invariants(state);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(InvariantViolation::new(format!(
            "Postcondition failed: {}",
            violations.join("; ")
        )))
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Contracts
// ─────────────────────────────────────────────────────────────

/// Contract for guess submissions.
///
/// Preconditions: see [`ValidGuess`].
///
/// Postconditions:
/// - exactly one attempt consumed
/// - secret and profile unchanged
/// - round invariants hold
pub struct GuessContract;

impl Contract<RoundState, str> for GuessContract {
    type Checked = i64;

    fn pre(state: &RoundState, raw: &str) -> Result<i64, GuessError> {
        ValidGuess::check(raw, state)
    }

    fn post(before: &RoundState, after: &RoundState) -> Result<(), InvariantViolation> {
        if after.attempts_used != before.attempts_used + 1 {
            return Err(InvariantViolation::new(format!(
                "Postcondition failed: attempts went from {} to {}",
                before.attempts_used, after.attempts_used
            )));
        }
        if after.secret != before.secret || after.profile != before.profile {
            return Err(InvariantViolation::new(
                "Postcondition failed: round identity changed during a guess",
            ));
        }
        check_invariants(after)
    }
}

/// Contract for starting a round.
///
/// Postconditions:
/// - attempts reset, status in progress
/// - exactly one more game played, wins untouched
/// - round invariants hold
pub struct StartRoundContract;

impl Contract<RoundState, ()> for StartRoundContract {
    type Checked = ();

    fn pre(_state: &RoundState, _action: &()) -> Result<(), GuessError> {
        Ok(())
    }

    fn post(before: &RoundState, after: &RoundState) -> Result<(), InvariantViolation> {
        if after.attempts_used != 0 || after.status != GameStatus::InProgress {
            return Err(InvariantViolation::new(
                "Postcondition failed: new round did not reset",
            ));
        }
        if *after.stats.games_played() != before.stats.games_played() + 1
            || after.stats.wins() != before.stats.wins()
        {
            return Err(InvariantViolation::new(
                "Postcondition failed: round counters drifted",
            ));
        }
        check_invariants(after)
    }
}
