use glam::Vec3A;

use super::{ItemKind, Kart, Track};

/// Counters of the race in progress, reset on restart
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceState {
    /// The lap the player is on, starting at 1
    pub lap_count: u32,
    /// Monotonic checkpoint progress of the player
    pub last_checkpoint: usize,
    /// Seconds of race clock
    pub clock: f32,
    pub held_item: Option<ItemKind>,
}

impl Default for RaceState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What the player's checkpoint check produced this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckpointProgress {
    None,
    Checkpoint { index: usize },
    Lap { lap: u32 },
    Finished,
}

impl RaceState {
    pub const DEFAULT: Self = Self {
        lap_count: 1,
        last_checkpoint: 0,
        clock: 0.0,
        held_item: None,
    };

    pub const fn reset(&mut self) {
        *self = Self::DEFAULT;
    }

    /// Advances the player's progress if they reached their next checkpoint
    pub fn check_checkpoint(
        &mut self,
        player_pos: Vec3A,
        track: &Track,
        radius: f32,
        total_laps: u32,
    ) -> CheckpointProgress {
        let checkpoint = track.checkpoint_for(self.last_checkpoint);
        if player_pos.distance(checkpoint.pos) >= radius {
            return CheckpointProgress::None;
        }

        self.last_checkpoint += 1;
        if self.last_checkpoint % track.checkpoint_amount() != 0 {
            return CheckpointProgress::Checkpoint {
                index: checkpoint.index,
            };
        }

        self.lap_count += 1;
        if self.lap_count > total_laps {
            CheckpointProgress::Finished
        } else {
            CheckpointProgress::Lap {
                lap: self.lap_count,
            }
        }
    }

    /// Player's distance to the checkpoint they are heading for
    #[must_use]
    pub fn dist_to_next(&self, player_pos: Vec3A, track: &Track) -> f32 {
        player_pos.distance(track.checkpoint_for(self.last_checkpoint).pos)
    }

    /// 1-based standing of the player.
    ///
    /// Karts on a later lap are ahead. On the same lap the kart closer to its own next
    /// checkpoint is ahead, even if that checkpoint is an earlier one than the player's.
    #[must_use]
    pub fn player_rank(&self, karts: &[Kart], track: &Track) -> usize {
        let Some(player) = karts.iter().find(|k| k.is_player()) else {
            return 1;
        };

        let checkpoint_amount = track.checkpoint_amount();
        let player_dist = self.dist_to_next(player.state.pos, track);

        1 + karts
            .iter()
            .filter(|k| !k.is_player())
            .filter(|k| {
                let kart_lap = k.state.completed_laps(checkpoint_amount) as u32 + 1;
                if kart_lap != self.lap_count {
                    return kart_lap > self.lap_count;
                }

                let kart_dist = k
                    .state
                    .pos
                    .distance(track.checkpoint_for(k.state.ai_target).pos);
                kart_dist < player_dist
            })
            .count()
    }
}
