use crate::{consts::kart, sim::RaceConfig};

use super::KartState;

/// Which way the steering is held this frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
    #[default]
    Straight,
}

impl Steer {
    /// Left wins if both directions are held
    #[must_use]
    pub const fn from_keys(left: bool, right: bool) -> Self {
        if left {
            Self::Left
        } else if right {
            Self::Right
        } else {
            Self::Straight
        }
    }

    /// Sign of the heading change, left turns increase the heading
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
            Self::Straight => 0.0,
        }
    }
}

impl KartState {
    /// Accelerate, reverse or coast for one frame
    pub fn apply_pedals(&mut self, forward: bool, backward: bool, config: &RaceConfig) {
        if forward {
            self.speed = (self.speed + config.accel).min(self.max_speed);
        } else if backward {
            self.speed = (self.speed - config.accel).max(self.min_speed());
        } else {
            self.speed *= config.friction;
        }
    }

    /// Sets the turn rate for this frame and advances or resets the drift timer
    pub fn apply_steering(&mut self, steer: Steer, drift: bool, dt: f32, config: &RaceConfig) {
        if steer == Steer::Straight {
            self.turn_rate = 0.0;
            self.drift_time = 0.0;
            return;
        }

        let drifting = drift && self.speed > kart::DRIFT_MIN_SPEED;
        let turn_scale = if drifting { config.drift_factor } else { 1.0 };
        self.turn_rate = steer.sign() * config.turn_speed * turn_scale;

        if drifting {
            self.drift_time += dt;
        } else {
            self.drift_time = 0.0;
        }
    }

    /// Rebuilds `max_speed` from the base cap, the drift reward and item effects
    pub fn refresh_max_speed(&mut self, effect_speed_scale: f32) {
        let drift_scale = if self.is_drift_boosted() {
            kart::DRIFT_BOOST_SCALE
        } else {
            1.0
        };

        self.max_speed = self.base_max_speed * drift_scale * effect_speed_scale;
    }

    /// Fraction of the turn rate applied this frame, steering fades out at low speed
    #[must_use]
    pub fn steer_effect(&self) -> f32 {
        if self.max_speed <= 0.0 {
            return 0.0;
        }

        (self.speed.abs() / self.max_speed).min(1.0)
    }

    /// Explicit Euler step: clamp speed, turn, then move along the new heading
    pub fn integrate(&mut self) {
        self.speed = self.speed.clamp(self.min_speed(), self.max_speed.max(0.0));

        if self.speed.abs() <= kart::MIN_MOVE_SPEED {
            return;
        }

        self.heading += self.turn_rate * self.steer_effect();
        self.pos += self.forward_dir() * self.speed;
        self.wheel_spin += self.speed * kart::WHEEL_SPIN_SCALE;
    }
}
