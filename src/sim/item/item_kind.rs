use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::consts::items::{mushroom, star};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Short speed boost
    Mushroom,
    /// Visual fireball thrown ahead of the kart
    Fireball,
    /// Invincibility with a larger speed boost
    Star,
}

/// Timed modifiers an item can leave on a kart
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    SpeedBoost,
    Invincibility,
}

impl EffectKind {
    #[must_use]
    pub const fn speed_scale(self) -> f32 {
        match self {
            Self::SpeedBoost => mushroom::SPEED_SCALE,
            Self::Invincibility => star::SPEED_SCALE,
        }
    }

    #[must_use]
    pub const fn duration(self) -> f32 {
        match self {
            Self::SpeedBoost => mushroom::DURATION,
            Self::Invincibility => star::DURATION,
        }
    }
}

impl ItemKind {
    pub const ALL: [Self; 3] = [Self::Mushroom, Self::Fireball, Self::Star];

    const NAMES: [&'static str; 3] = ["mushroom", "fireball", "star"];
    const ICONS: [&'static str; 3] = ["🍄", "🔥", "⭐"];

    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Glyph shown in the held-item slot
    #[must_use]
    pub const fn icon(self) -> &'static str {
        Self::ICONS[self as usize]
    }

    /// The timed effect this item applies to its user, if any
    #[must_use]
    pub const fn effect(self) -> Option<EffectKind> {
        match self {
            Self::Mushroom => Some(EffectKind::SpeedBoost),
            Self::Fireball => None,
            Self::Star => Some(EffectKind::Invincibility),
        }
    }

    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Mushroom),
            1 => Some(Self::Fireball),
            2 => Some(Self::Star),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown item \"{0}\", expected mushroom, fireball or star")]
pub struct UnknownItem(pub String);

impl FromStr for ItemKind {
    type Err = UnknownItem;

    /// Accepts either the item name or its icon
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name || kind.icon() == trimmed)
            .ok_or_else(|| UnknownItem(s.to_owned()))
    }
}
