use glam::Vec3A;

use crate::consts::ai::{self, rubber_band};

use super::{DifficultyProfile, DriveAction, DriveContext, Kart, KartController, KartState};

/// Checkpoint-seeking controller for computer karts.
///
/// Holds no state of its own: the difficulty comes in through [`DriveContext`] so a
/// change applies on the next update.
#[derive(Clone, Copy, Debug, Default)]
pub struct AiController;

impl AiController {
    /// Turns toward `dir` once the deviation leaves the dead zone, drifting through hard corners
    fn steer(
        state: &mut KartState,
        forward: Vec3A,
        dir: Vec3A,
        profile: DifficultyProfile,
        ctx: &DriveContext<'_>,
    ) {
        let deviation = forward.cross(dir).y;
        let threshold = ai::STEER_THRESHOLD * profile.turn_accuracy;

        state.turn_rate = if deviation > threshold {
            ctx.config.turn_speed
        } else if deviation < -threshold {
            -ctx.config.turn_speed
        } else {
            0.0
        };

        if deviation.abs() > ai::CORNER_DEVIATION && state.speed > ai::CORNER_MIN_SPEED {
            state.turn_rate *= ctx.config.drift_factor * ai::CORNER_DRIFT_SCALE;
            state.drift_time += ctx.dt;
        } else {
            state.drift_time = 0.0;
        }
    }

    /// Picks accelerate, cruise or brake from how well the kart lines up with its target
    fn throttle(
        state: &mut KartState,
        forward: Vec3A,
        dir: Vec3A,
        profile: DifficultyProfile,
        ctx: &DriveContext<'_>,
    ) {
        let alignment = forward.dot(dir);
        let cap = ctx.config.base_speed * profile.max_speed_ratio;

        state.speed = if alignment > ai::ALIGNED_DOT {
            (state.speed + ai::ACCEL).min(cap)
        } else if alignment > ai::CRUISE_DOT {
            (state.speed + ai::CRUISE_ACCEL).min(cap * ai::CRUISE_SPEED_RATIO)
        } else {
            (state.speed - ai::DECEL).max(cap * ai::SLOW_SPEED_RATIO)
        };

        state.speed = state.speed.max(ai::MIN_SPEED);
    }

    /// Sidesteps nearby karts and pulls strays back toward the middle of the course
    fn avoid_obstacles(state: &mut KartState, ctx: &DriveContext<'_>) {
        for (other_idx, &other_pos) in ctx.kart_positions.iter().enumerate() {
            if other_idx == ctx.kart_idx {
                continue;
            }

            if state.pos.distance(other_pos) < ai::AVOID_RADIUS {
                let away = (state.pos - other_pos).normalize_or_zero();
                let side_step = Vec3A::new(-away.z, 0.0, away.x);
                state.pos += side_step * ai::AVOID_STEP;
                state.speed *= ai::AVOID_SPEED_DECAY;
            }
        }

        if state.pos.length() > ai::BOUNDS_RADIUS {
            state.pos += -state.pos.normalize_or_zero() * ai::BOUNDS_PULL;
        }
    }
}

impl KartController for AiController {
    fn is_player(&self) -> bool {
        false
    }

    fn drive(&mut self, state: &mut KartState, ctx: &DriveContext<'_>) -> DriveAction {
        let profile = ctx.difficulty.profile();
        let target = ctx.track.checkpoint_for(state.ai_target).pos;
        let dir = (target - state.pos).normalize_or_zero();
        let forward = state.forward_dir();

        Self::steer(state, forward, dir, profile, ctx);
        Self::throttle(state, forward, dir, profile, ctx);

        if state.pos.distance(target) < ctx.config.checkpoint_radius {
            state.ai_target += 1;
        }

        Self::avoid_obstacles(state, ctx);

        DriveAction::Drive
    }
}

/// Speed cap multiplier for an AI kart at `dist_to_player` from the player
#[must_use]
pub fn rubber_band_scale(dist_to_player: f32) -> f32 {
    if dist_to_player > rubber_band::FAR_DIST {
        rubber_band::FAR_SPEED_SCALE
    } else if dist_to_player < rubber_band::NEAR_DIST {
        rubber_band::NEAR_SPEED_SCALE
    } else {
        1.0
    }
}

/// Rewrites every AI kart's base speed cap from its distance to the player.
///
/// Runs after all controllers for the frame, overriding whatever they assumed.
pub fn apply_rubber_band(karts: &mut [Kart], base_speed: f32) {
    let Some(player_pos) = karts.iter().find(|k| k.is_player()).map(|k| k.state.pos) else {
        return;
    };

    for kart in karts.iter_mut().filter(|k| !k.is_player()) {
        kart.state.base_max_speed = base_speed * rubber_band_scale(kart.state.pos.distance(player_pos));
    }
}
