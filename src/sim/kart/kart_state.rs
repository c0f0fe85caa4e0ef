use glam::{Mat3A, Vec3A};

use crate::consts::kart;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KartState {
    pub pos: Vec3A,
    /// Rotation about +Y in radians, 0 faces -Z
    pub heading: f32,
    /// Signed speed in units per frame, negative when reversing
    pub speed: f32,
    /// Heading change per frame at full steering authority
    pub turn_rate: f32,
    /// Current speed cap, rebuilt every frame from `base_max_speed` and modifiers
    pub max_speed: f32,
    /// Speed cap before drift and item modifiers
    ///
    /// The rubber band pass rewrites this for AI karts
    pub base_max_speed: f32,
    /// Seconds spent continuously drifting
    pub drift_time: f32,
    pub is_player: bool,
    /// Monotonic checkpoint progress of an AI kart
    pub ai_target: usize,
    pub invincible: bool,
    /// Purely visual wheel rotation
    pub wheel_spin: f32,
}

impl Default for KartState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl KartState {
    pub const DEFAULT: Self = Self {
        pos: Vec3A::ZERO,
        heading: 0.0,
        speed: 0.0,
        turn_rate: 0.0,
        max_speed: kart::BASE_SPEED,
        base_max_speed: kart::BASE_SPEED,
        drift_time: 0.0,
        is_player: false,
        ai_target: 0,
        invincible: false,
        wheel_spin: 0.0,
    };

    #[must_use]
    pub const fn spawned_at(pos: Vec3A, is_player: bool, base_speed: f32) -> Self {
        Self {
            pos,
            is_player,
            max_speed: base_speed,
            base_max_speed: base_speed,
            ..Self::DEFAULT
        }
    }

    #[must_use]
    pub fn rot_mat(&self) -> Mat3A {
        Mat3A::from_rotation_y(self.heading)
    }

    #[must_use]
    pub fn forward_dir(&self) -> Vec3A {
        Vec3A::new(-self.heading.sin(), 0.0, -self.heading.cos())
    }

    /// Laps this kart has fully driven, derived from its checkpoint progress
    #[must_use]
    pub const fn completed_laps(&self, checkpoint_amount: usize) -> usize {
        self.ai_target / checkpoint_amount
    }

    #[must_use]
    pub const fn min_speed(&self) -> f32 {
        -self.max_speed * kart::REVERSE_SPEED_RATIO
    }

    #[must_use]
    pub const fn is_drift_boosted(&self) -> bool {
        self.is_player && self.drift_time > kart::DRIFT_BOOST_TIME
    }
}
