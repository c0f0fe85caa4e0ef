use glam::Vec3A;

use crate::consts::camera;

use super::KartState;

/// Chase camera trailing the player kart
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChaseCamera {
    pub pos: Vec3A,
    pub look_at: Vec3A,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ChaseCamera {
    pub const DEFAULT: Self = Self {
        pos: camera::OFFSET,
        look_at: Vec3A::ZERO,
    };

    /// Where the camera wants to sit behind `kart`
    #[must_use]
    pub fn ideal_pos(kart: &KartState) -> Vec3A {
        kart.pos + kart.rot_mat() * camera::OFFSET
    }

    pub fn follow(&mut self, kart: &KartState) {
        self.pos = self.pos.lerp(Self::ideal_pos(kart), camera::LERP_SPEED);
        self.look_at = kart.pos;
    }

    /// Jumps straight to the ideal position
    pub fn snap_to(&mut self, kart: &KartState) {
        self.pos = Self::ideal_pos(kart);
        self.look_at = kart.pos;
    }
}
