use crate::consts::hud;

use super::ItemKind;

/// Display values for the UI layer, refreshed every frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HudState {
    pub lap: u32,
    pub total_laps: u32,
    pub elapsed: f32,
    pub speed_kmh: u32,
    /// 1-based standing of the player
    pub rank: usize,
    pub held_item: Option<ItemKind>,
}

impl HudState {
    #[must_use]
    pub fn speed_kmh(speed: f32) -> u32 {
        (speed.abs() * hud::SPEED_TO_KMH).round() as u32
    }

    /// `m:ss` with whole seconds
    #[must_use]
    pub fn format_time(elapsed: f32) -> String {
        let total_secs = elapsed.max(0.0) as u64;
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    }

    #[must_use]
    pub fn time_text(&self) -> String {
        Self::format_time(self.elapsed)
    }
}
