use glam::Vec3A;

use crate::consts;

use super::Difficulty;

/// Tunables for a race.
///
/// Every field starts at the value in [`consts`]; tests and hosts override what they need.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceConfig {
    pub base_speed: f32,
    pub accel: f32,
    pub friction: f32,
    pub turn_speed: f32,
    pub drift_factor: f32,
    pub total_laps: u32,
    /// Number of karts on the grid, clamped to [`consts::kart::MAX_KARTS`]
    pub kart_amount: usize,
    pub checkpoint_radius: f32,
    pub pickup_radius: f32,
    pub item_respawn_time: f32,
    pub max_frame_time: f32,
    pub min_frame_time: f32,
    pub difficulty: Difficulty,
    /// Use a custom list of item box locations (`custom_item_boxes`) instead of the normal one
    pub use_custom_item_boxes: bool,
    /// Custom item box locations to use, if `use_custom_item_boxes`
    pub custom_item_boxes: Vec<Vec3A>,
    /// Optional RNG seed for deterministic item rolls
    /// If None, a random seed will be used
    pub rng_seed: Option<u64>,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl RaceConfig {
    pub const DEFAULT: Self = Self {
        base_speed: consts::kart::BASE_SPEED,
        accel: consts::kart::ACCEL,
        friction: consts::kart::FRICTION,
        turn_speed: consts::kart::TURN_SPEED,
        drift_factor: consts::kart::DRIFT_FACTOR,
        total_laps: consts::race::TOTAL_LAPS,
        kart_amount: consts::kart::MAX_KARTS,
        checkpoint_radius: consts::track::CHECKPOINT_RADIUS,
        pickup_radius: consts::items::PICKUP_RADIUS,
        item_respawn_time: consts::items::RESPAWN_TIME,
        max_frame_time: consts::race::MAX_FRAME_TIME,
        min_frame_time: consts::race::MIN_FRAME_TIME,
        difficulty: Difficulty::Medium,
        use_custom_item_boxes: false,
        custom_item_boxes: Vec::new(),
        rng_seed: None,
    };

    #[must_use]
    pub fn item_box_locations(&self) -> Vec<Vec3A> {
        if self.use_custom_item_boxes {
            self.custom_item_boxes.clone()
        } else {
            consts::items::LOCS.to_vec()
        }
    }

    #[must_use]
    pub fn kart_amount(&self) -> usize {
        self.kart_amount.clamp(1, consts::kart::MAX_KARTS)
    }
}
