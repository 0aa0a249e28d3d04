//! One player's game session: the current round plus running statistics.

use crate::contracts::{Contract, GuessContract, StartRoundContract};
use crate::{
    Difficulty, DifficultyProfile, GameStatus, GuessError, GuessOutcome, RandomSecret,
    SecretSource, SessionStats, StateSnapshot,
};
use tracing::{debug, info, instrument, warn};

/// Plain data behind a session, checked by the contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RoundState {
    pub(crate) profile: DifficultyProfile,
    pub(crate) secret: i64,
    pub(crate) attempts_used: u32,
    pub(crate) status: GameStatus,
    pub(crate) stats: SessionStats,
}

/// A number-guessing session.
///
/// A session is always in some round: construction starts the first one.
/// Only [`GameStatus::InProgress`] rounds accept guesses; won and lost rounds
/// stay put until [`GameSession::start_new_round`] is called.
///
/// Contract enforcement:
/// - Preconditions checked always, before any mutation
/// - Postconditions checked in debug builds only
#[derive(Debug, Clone)]
pub struct GameSession<S = RandomSecret> {
    state: RoundState,
    source: S,
}

impl GameSession<RandomSecret> {
    /// Starts a session whose secrets come from the thread-local CSPRNG.
    #[instrument(fields(difficulty = %profile.difficulty()))]
    pub fn start(profile: DifficultyProfile) -> Self {
        Self::with_source(profile, RandomSecret::default())
    }
}

impl Default for GameSession<RandomSecret> {
    fn default() -> Self {
        Self::start(DifficultyProfile::default())
    }
}

impl<S: SecretSource> GameSession<S> {
    /// Starts a session drawing secrets from `source`.
    #[instrument(skip(source), fields(difficulty = %profile.difficulty()))]
    pub fn with_source(profile: DifficultyProfile, source: S) -> Self {
        let mut session = Self {
            state: RoundState {
                profile,
                secret: profile.min_value(),
                attempts_used: 0,
                status: GameStatus::InProgress,
                stats: SessionStats::new(),
            },
            source,
        };
        session.start_new_round(profile);
        session
    }

    /// Starts a new round under `profile`, discarding the current one.
    ///
    /// Draws a fresh secret, resets attempts and counts one more game played.
    #[instrument(skip(self), fields(difficulty = %profile.difficulty()))]
    pub fn start_new_round(&mut self, profile: DifficultyProfile) {
        #[cfg(debug_assertions)]
        let before = self.state;

        let secret = self.source.draw(&profile);
        let state = &mut self.state;
        state.profile = profile;
        state.secret = secret;
        state.attempts_used = 0;
        state.status = GameStatus::InProgress;
        state.stats.record_round_started();

        info!(
            games_played = *state.stats.games_played(),
            min = profile.min_value(),
            max = profile.max_value(),
            max_attempts = profile.max_attempts(),
            "New round started"
        );

        #[cfg(debug_assertions)]
        debug_assert_eq!(StartRoundContract::post(&before, &self.state), Ok(()));
    }

    /// Starts a new round with the current profile.
    pub fn restart(&mut self) {
        self.start_new_round(self.state.profile);
    }

    /// Switches difficulty, which always starts a new round.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.start_new_round(DifficultyProfile::for_difficulty(difficulty));
    }

    /// Submits raw guess text.
    ///
    /// Rejections ([`GuessError`]) leave the session untouched and cost no
    /// attempt. Anything else consumes exactly one attempt. A correct guess on
    /// the final attempt is a win.
    #[instrument(skip(self), fields(difficulty = %self.state.profile.difficulty()))]
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        let guess = GuessContract::pre(&self.state, raw).inspect_err(|error| {
            warn!(%error, "Guess rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.state;

        let state = &mut self.state;
        state.attempts_used += 1;
        let attempts = state.attempts_used;

        let outcome = if guess == state.secret {
            state.status = GameStatus::Won;
            state.stats.record_win(attempts);
            info!(attempts, "Round won");
            GuessOutcome::Correct { attempts }
        } else if attempts >= state.profile.max_attempts() {
            state.status = GameStatus::Lost;
            info!(attempts, secret = state.secret, "Round lost");
            GuessOutcome::Exhausted {
                secret: state.secret,
            }
        } else if guess < state.secret {
            GuessOutcome::TooLow
        } else {
            GuessOutcome::TooHigh
        };

        debug!(guess, attempts, ?outcome, "Guess classified");

        #[cfg(debug_assertions)]
        debug_assert_eq!(GuessContract::post(&before, &self.state), Ok(()));

        Ok(outcome)
    }

    /// Returns a snapshot for rendering.
    ///
    /// The secret is included once the round is over, won or lost.
    pub fn current_state(&self) -> StateSnapshot {
        let revealed_secret = self.state.status.is_terminal().then_some(self.state.secret);
        StateSnapshot::new(
            &self.state.profile,
            self.state.status,
            self.state.attempts_used,
            &self.state.stats,
            revealed_secret,
        )
    }

    /// Active profile.
    pub fn profile(&self) -> &DifficultyProfile {
        &self.state.profile
    }

    /// Current round status.
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Valid guesses made this round.
    pub fn attempts_used(&self) -> u32 {
        self.state.attempts_used
    }

    /// Statistics across all rounds of this session.
    pub fn stats(&self) -> &SessionStats {
        &self.state.stats
    }
}
