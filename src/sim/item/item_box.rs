use glam::Vec3A;

use crate::consts::items;

/// A collectible item box on the track
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBox {
    pub pos: Vec3A,
    pub collected: bool,
    /// Race clock time at which a collected box comes back
    pub respawn_at: Option<f32>,
    /// Spin angles for the renderer
    pub yaw: f32,
    pub pitch: f32,
}

impl ItemBox {
    #[must_use]
    pub const fn new(pos: Vec3A) -> Self {
        Self {
            pos,
            collected: false,
            respawn_at: None,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !self.collected
    }

    pub const fn reset(&mut self) {
        *self = Self::new(self.pos);
    }

    /// Returns true if the box was picked up by a kart at `kart_pos`
    pub fn try_collect(&mut self, kart_pos: Vec3A, radius: f32, now: f32, respawn_time: f32) -> bool {
        if self.collected || kart_pos.distance(self.pos) >= radius {
            return false;
        }

        self.collected = true;
        self.respawn_at = Some(now + respawn_time);
        true
    }

    /// Brings the box back once its deadline passes and advances the idle spin
    pub fn update(&mut self, now: f32) {
        if let Some(respawn_at) = self.respawn_at
            && now >= respawn_at
        {
            self.collected = false;
            self.respawn_at = None;
        }

        if !self.collected {
            self.yaw += items::SPIN_PER_FRAME;
            self.pitch = (now * items::BOB_FREQUENCY).sin() * items::BOB_AMPLITUDE;
        }
    }
}
