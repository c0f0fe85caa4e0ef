use std::fmt::Debug;

use glam::Vec3A;

use crate::sim::{Difficulty, InputState, Key, RaceConfig, Track};

use super::{KartState, Steer};

/// Everything a controller may read while deciding a kart's frame
#[derive(Clone, Copy, Debug)]
pub struct DriveContext<'a> {
    pub input: &'a InputState,
    pub track: &'a Track,
    /// Positions of every kart at the start of the frame, indexed like the race's kart list
    pub kart_positions: &'a [Vec3A],
    pub kart_idx: usize,
    pub difficulty: Difficulty,
    pub config: &'a RaceConfig,
    pub has_held_item: bool,
    pub dt: f32,
}

/// Requests a controller can hand back to the race loop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DriveAction {
    #[default]
    Drive,
    /// Fire the held item
    UseItem,
}

/// Decides speed and turn rate for one kart each frame.
///
/// Chosen when the kart is created, a kart never switches controllers mid-race.
pub trait KartController: Debug {
    fn is_player(&self) -> bool;

    fn drive(&mut self, state: &mut KartState, ctx: &DriveContext<'_>) -> DriveAction;
}

/// Drives a kart from the polled [`InputState`]
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerController;

impl KartController for PlayerController {
    fn is_player(&self) -> bool {
        true
    }

    fn drive(&mut self, state: &mut KartState, ctx: &DriveContext<'_>) -> DriveAction {
        let input = ctx.input;

        state.apply_pedals(
            input.is_pressed(Key::Forward),
            input.is_pressed(Key::Backward),
            ctx.config,
        );

        state.apply_steering(
            Steer::from_keys(input.is_pressed(Key::Left), input.is_pressed(Key::Right)),
            input.is_pressed(Key::Drift),
            ctx.dt,
            ctx.config,
        );

        if input.is_pressed(Key::UseItem) && ctx.has_held_item {
            DriveAction::UseItem
        } else {
            DriveAction::Drive
        }
    }
}
