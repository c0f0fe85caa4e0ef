use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// How an AI kart drives under a given [`Difficulty`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyProfile {
    /// Fraction of the base kart speed the AI aims for
    pub max_speed_ratio: f32,
    /// Scales the steering dead zone
    pub turn_accuracy: f32,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    const NAMES: [&'static str; 3] = ["easy", "medium", "hard"];

    const PROFILES: [DifficultyProfile; 3] = [
        DifficultyProfile {
            max_speed_ratio: 0.6,
            turn_accuracy: 0.8,
        },
        DifficultyProfile {
            max_speed_ratio: 0.8,
            turn_accuracy: 0.9,
        },
        DifficultyProfile {
            max_speed_ratio: 1.0,
            turn_accuracy: 0.95,
        },
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    #[must_use]
    pub const fn profile(self) -> DifficultyProfile {
        Self::PROFILES[self as usize]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown difficulty \"{0}\", expected easy, medium or hard")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name() == name)
            .ok_or_else(|| UnknownDifficulty(s.to_owned()))
    }
}
