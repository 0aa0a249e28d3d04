//! Difficulty tiers and their fixed profiles.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{instrument, warn};

/// Named difficulty tier.
///
/// The set is closed: there is no way to build a profile outside these three.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// 1..=50, 8 attempts.
    Easy,
    /// 1..=100, 10 attempts.
    #[default]
    Normal,
    /// 1..=500, 12 attempts.
    Hard,
}

impl Difficulty {
    /// Looks up a difficulty by name, ignoring ASCII case and surrounding whitespace.
    #[instrument]
    pub fn from_name(name: &str) -> Result<Self, DifficultyError> {
        let trimmed = name.trim();
        trimmed.parse::<Self>().map_err(|_| {
            warn!(name = trimmed, "Unknown difficulty requested");
            DifficultyError::InvalidDifficulty(trimmed.to_string())
        })
    }

    /// Selector label, e.g. `"Normal (1-100)"`.
    pub fn label(self) -> String {
        let profile = DifficultyProfile::for_difficulty(self);
        format!("{} ({}-{})", self, profile.min_value(), profile.max_value())
    }

    /// All tiers, easiest first.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Immutable configuration for one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DifficultyProfile {
    difficulty: Difficulty,
    min_value: i64,
    max_value: i64,
    max_attempts: u32,
}

impl DifficultyProfile {
    /// Returns the fixed profile for a tier.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let (min_value, max_value, max_attempts) = match difficulty {
            Difficulty::Easy => (1, 50, 8),
            Difficulty::Normal => (1, 100, 10),
            Difficulty::Hard => (1, 500, 12),
        };
        Self {
            difficulty,
            min_value,
            max_value,
            max_attempts,
        }
    }

    /// Looks up a profile by difficulty name.
    ///
    /// Fails with [`DifficultyError::InvalidDifficulty`] for anything other
    /// than easy, normal or hard.
    #[instrument]
    pub fn from_name(name: &str) -> Result<Self, DifficultyError> {
        Difficulty::from_name(name).map(Self::for_difficulty)
    }

    /// The tier this profile was built from.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Smallest value a secret or guess may take.
    pub fn min_value(&self) -> i64 {
        self.min_value
    }

    /// Largest value a secret or guess may take.
    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    /// Valid guesses allowed per round.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether `value` lies in `[min_value, max_value]`.
    pub fn contains(&self, value: i64) -> bool {
        (self.min_value..=self.max_value).contains(&value)
    }

    /// Number of distinct values in the range.
    pub fn span(&self) -> i64 {
        self.max_value - self.min_value + 1
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

impl From<Difficulty> for DifficultyProfile {
    fn from(difficulty: Difficulty) -> Self {
        Self::for_difficulty(difficulty)
    }
}

/// Error building a difficulty profile.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DifficultyError {
    /// The name is not one of easy, normal or hard.
    #[display("Unknown difficulty '{}' (expected easy, normal or hard)", _0)]
    InvalidDifficulty(String),
}

impl std::error::Error for DifficultyError {}
