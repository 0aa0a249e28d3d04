//! Sources of secret values.
//!
//! Sessions draw their secret through [`SecretSource`] so the random
//! generator can be swapped for a scripted one in tests and demos.

use crate::DifficultyProfile;
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::instrument;

/// Produces the secret for a new round.
pub trait SecretSource {
    /// Draws a secret in `[profile.min_value(), profile.max_value()]`.
    fn draw(&mut self, profile: &DifficultyProfile) -> i64;
}

/// Uniform random draws from any [`Rng`].
///
/// The default wraps [`rand::rng`], a ChaCha-based CSPRNG seeded from the
/// operating system, so secrets cannot be predicted from earlier rounds.
#[derive(Debug, Clone)]
pub struct RandomSecret<R = ThreadRng> {
    rng: R,
}

impl<R: Rng> RandomSecret<R> {
    /// Draws secrets from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomSecret<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> SecretSource for RandomSecret<R> {
    #[instrument(skip_all, fields(difficulty = %profile.difficulty()))]
    fn draw(&mut self, profile: &DifficultyProfile) -> i64 {
        self.rng
            .random_range(profile.min_value()..=profile.max_value())
    }
}

/// Replays a fixed list of secrets, cycling when exhausted.
///
/// Values outside the profile range are clamped into it.
#[derive(Debug, Clone)]
pub struct ScriptedSecrets {
    secrets: Vec<i64>,
    next: usize,
}

impl ScriptedSecrets {
    /// Creates a source that yields `secrets` in order.
    ///
    /// An empty list yields the profile's minimum value every round.
    pub fn new(secrets: impl IntoIterator<Item = i64>) -> Self {
        Self {
            secrets: secrets.into_iter().collect(),
            next: 0,
        }
    }
}

impl SecretSource for ScriptedSecrets {
    #[instrument(skip_all, fields(difficulty = %profile.difficulty()))]
    fn draw(&mut self, profile: &DifficultyProfile) -> i64 {
        let Some(&secret) = self.secrets.get(self.next % self.secrets.len().max(1)) else {
            return profile.min_value();
        };
        self.next += 1;
        secret.clamp(profile.min_value(), profile.max_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Difficulty;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_draws_stay_in_range() {
        let mut source = RandomSecret::new(StdRng::seed_from_u64(7));
        for difficulty in Difficulty::all() {
            let profile = DifficultyProfile::for_difficulty(difficulty);
            for _ in 0..5_000 {
                let secret = source.draw(&profile);
                assert!(profile.contains(secret), "{secret} outside {difficulty}");
            }
        }
    }

    #[test]
    fn test_random_draws_cover_whole_range() {
        let profile = DifficultyProfile::for_difficulty(Difficulty::Easy);
        let mut source = RandomSecret::new(StdRng::seed_from_u64(42));
        let mut counts = vec![0u32; profile.span() as usize];
        let draws = 50_000;
        for _ in 0..draws {
            let secret = source.draw(&profile);
            counts[(secret - profile.min_value()) as usize] += 1;
        }

        // Expected 1000 per bucket; a fair generator stays well inside ±25%.
        let expected = draws / profile.span() as u32;
        for (offset, count) in counts.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < expected / 4,
                "value {} drawn {count} times",
                offset as i64 + profile.min_value()
            );
        }
    }

    #[test]
    fn test_default_source_draws_in_range() {
        let profile = DifficultyProfile::for_difficulty(Difficulty::Hard);
        let mut source: RandomSecret = RandomSecret::default();
        for _ in 0..1_000 {
            assert!(profile.contains(source.draw(&profile)));
        }
    }

    #[test]
    fn test_scripted_secrets_cycle_and_clamp() {
        let profile = DifficultyProfile::for_difficulty(Difficulty::Easy);
        let mut source = ScriptedSecrets::new([10, 99, -3]);
        assert_eq!(source.draw(&profile), 10);
        assert_eq!(source.draw(&profile), 50);
        assert_eq!(source.draw(&profile), 1);
        assert_eq!(source.draw(&profile), 10);
    }

    #[test]
    fn test_empty_script_yields_minimum() {
        let profile = DifficultyProfile::for_difficulty(Difficulty::Normal);
        let mut source = ScriptedSecrets::new([]);
        assert_eq!(source.draw(&profile), 1);
    }
}
