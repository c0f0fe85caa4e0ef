use glam::Vec3A;

use crate::sim::AiController;

use super::{DriveAction, DriveContext, KartController, KartState, PlayerController};

/// A kart on the grid: its state plus the controller that drives it
#[derive(Debug)]
pub struct Kart {
    pub state: KartState,
    spawn_pos: Vec3A,
    controller: Box<dyn KartController>,
}

impl Kart {
    #[must_use]
    pub fn new(spawn_pos: Vec3A, base_speed: f32, controller: Box<dyn KartController>) -> Self {
        Self {
            state: KartState::spawned_at(spawn_pos, controller.is_player(), base_speed),
            spawn_pos,
            controller,
        }
    }

    #[must_use]
    pub fn new_player(spawn_pos: Vec3A, base_speed: f32) -> Self {
        Self::new(spawn_pos, base_speed, Box::new(PlayerController))
    }

    #[must_use]
    pub fn new_ai(spawn_pos: Vec3A, base_speed: f32) -> Self {
        Self::new(spawn_pos, base_speed, Box::new(AiController))
    }

    #[must_use]
    pub fn is_player(&self) -> bool {
        self.state.is_player
    }

    #[must_use]
    pub const fn spawn_pos(&self) -> Vec3A {
        self.spawn_pos
    }

    pub fn drive(&mut self, ctx: &DriveContext<'_>) -> DriveAction {
        self.controller.drive(&mut self.state, ctx)
    }

    /// Puts the kart back on its grid slot facing the start direction, at rest
    pub fn respawn(&mut self, base_speed: f32) {
        self.state = KartState::spawned_at(self.spawn_pos, self.controller.is_player(), base_speed);
    }
}
