use glam::Vec3A;

use super::EffectKind;

/// A timed modifier applied to one kart
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffect {
    pub kart_idx: usize,
    pub kind: EffectKind,
    /// Race clock time at which the effect ends
    pub expires_at: f32,
    /// Speed cap to put back when the effect ends
    pub restore_max_speed: f32,
}

impl ActiveEffect {
    #[must_use]
    pub fn is_expired(&self, now: f32) -> bool {
        now >= self.expires_at
    }
}

/// Short-lived visual left by a fireball, it has no gameplay collision
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fireball {
    pub pos: Vec3A,
    pub expires_at: f32,
}
