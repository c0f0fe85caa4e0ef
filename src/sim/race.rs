use arrayvec::ArrayVec;
use glam::Vec3A;
use log::{debug, info, warn};

use crate::consts;

use super::{
    ChaseCamera, CheckpointProgress, Difficulty, DriveAction, DriveContext, FrameClock, HudState,
    InputState, ItemKind, ItemSystem, Kart, RaceConfig, RaceState, Track, ai,
};

pub type KartList = ArrayVec<Kart, { consts::kart::MAX_KARTS }>;
pub type FrameEvents = ArrayVec<RaceEvent, { consts::race::MAX_FRAME_EVENTS }>;

/// Notable things that happened during a frame
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RaceEvent {
    ItemCollected(ItemKind),
    ItemUsed(ItemKind),
    CheckpointReached { index: usize },
    LapCompleted { lap: u32 },
    /// The player crossed the line on the final lap, the race has already been reset
    RaceFinished { time: f32 },
}

/// One race: track, karts, items and counters, advanced one frame at a time by the host
#[derive(Debug)]
pub struct Race {
    config: RaceConfig,
    track: Track,
    karts: KartList,
    player_idx: usize,
    items: ItemSystem,
    state: RaceState,
    difficulty: Difficulty,
    camera: ChaseCamera,
    hud: HudState,
    frame_clock: FrameClock,
    input: InputState,
    frame_count: u64,
}

impl Default for Race {
    fn default() -> Self {
        Self::new()
    }
}

impl Race {
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_config(RaceConfig::DEFAULT)
    }

    #[must_use]
    pub fn new_with_config(config: RaceConfig) -> Self {
        Self::new_with_track(config, Track::default())
    }

    #[must_use]
    pub fn new_with_track(config: RaceConfig, track: Track) -> Self {
        let karts = consts::kart::START_GRID[..config.kart_amount()]
            .iter()
            .enumerate()
            .map(|(i, &spawn_pos)| {
                if i == 0 {
                    Kart::new_player(spawn_pos, config.base_speed)
                } else {
                    Kart::new_ai(spawn_pos, config.base_speed)
                }
            })
            .collect::<KartList>();

        info!(
            "Starting a {}-lap race with {} karts on {} difficulty",
            config.total_laps,
            karts.len(),
            config.difficulty
        );

        let mut race = Self {
            items: ItemSystem::new(&config),
            frame_clock: FrameClock::new(config.min_frame_time, config.max_frame_time),
            difficulty: config.difficulty,
            config,
            track,
            karts,
            player_idx: 0,
            state: RaceState::DEFAULT,
            camera: ChaseCamera::DEFAULT,
            hud: HudState::default(),
            input: InputState::DEFAULT,
            frame_count: 0,
        };

        race.camera.snap_to(&race.karts[race.player_idx].state);
        race.update_hud();
        race
    }

    /// Feeds a host frame timestamp (seconds) through the frame clock.
    ///
    /// Returns None when the frame was skipped.
    pub fn advance(&mut self, timestamp: f64) -> Option<FrameEvents> {
        let frame_time = self.frame_clock.tick(timestamp)?;
        Some(self.step(frame_time))
    }

    /// Simulates one frame of `frame_time` seconds, clamped to the configured maximum
    pub fn step(&mut self, frame_time: f32) -> FrameEvents {
        let dt = frame_time.clamp(0.0, self.config.max_frame_time);
        let now = self.state.clock;
        let mut events = FrameEvents::new();

        self.update_karts(dt, now, &mut events);
        self.update_items(now, &mut events);
        let finished = self.update_progress(&mut events);

        self.camera.follow(&self.karts[self.player_idx].state);
        self.update_hud();

        if !finished {
            self.state.clock += dt;
        }
        self.frame_count += 1;

        events
    }

    fn push_event(events: &mut FrameEvents, event: RaceEvent) {
        if events.try_push(event).is_err() {
            warn!("Frame event buffer full, dropping {event:?}");
        }
    }

    fn update_karts(&mut self, dt: f32, now: f32, events: &mut FrameEvents) {
        let kart_positions = self
            .karts
            .iter()
            .map(|kart| kart.state.pos)
            .collect::<ArrayVec<Vec3A, { consts::kart::MAX_KARTS }>>();

        for kart_idx in 0..self.karts.len() {
            let ctx = DriveContext {
                input: &self.input,
                track: &self.track,
                kart_positions: &kart_positions,
                kart_idx,
                difficulty: self.difficulty,
                config: &self.config,
                has_held_item: self.state.held_item.is_some(),
                dt,
            };

            let action = self.karts[kart_idx].drive(&ctx);
            if action == DriveAction::UseItem
                && let Some(item) = self.state.held_item.take()
            {
                self.items
                    .use_item(item, kart_idx, &mut self.karts[kart_idx].state, now);
                Self::push_event(events, RaceEvent::ItemUsed(item));
            }
        }

        ai::apply_rubber_band(&mut self.karts, self.config.base_speed);

        for (kart_idx, kart) in self.karts.iter_mut().enumerate() {
            kart.state
                .refresh_max_speed(self.items.speed_scale(kart_idx));
            kart.state.integrate();
        }
    }

    fn update_items(&mut self, now: f32, events: &mut FrameEvents) {
        self.items.update(&mut self.karts, now);

        let player_pos = self.karts[self.player_idx].state.pos;
        if let Some(item) = self.items.check_pickups(player_pos, now, &self.config) {
            self.state.held_item = Some(item);
            Self::push_event(events, RaceEvent::ItemCollected(item));
        }
    }

    /// Returns true if the race finished (and was reset) this frame
    fn update_progress(&mut self, events: &mut FrameEvents) -> bool {
        let progress = self.state.check_checkpoint(
            self.karts[self.player_idx].state.pos,
            &self.track,
            self.config.checkpoint_radius,
            self.config.total_laps,
        );

        match progress {
            CheckpointProgress::None => false,
            CheckpointProgress::Checkpoint { index } => {
                debug!("Player reached checkpoint {index}");
                Self::push_event(events, RaceEvent::CheckpointReached { index });
                false
            }
            CheckpointProgress::Lap { lap } => {
                info!("Player started lap {lap}/{}", self.config.total_laps);
                Self::push_event(events, RaceEvent::LapCompleted { lap });
                false
            }
            CheckpointProgress::Finished => {
                let time = self.state.clock;
                info!("Race finished in {}!", HudState::format_time(time));
                Self::push_event(events, RaceEvent::RaceFinished { time });
                self.restart();
                true
            }
        }
    }

    fn update_hud(&mut self) {
        self.hud = HudState {
            lap: self.state.lap_count,
            total_laps: self.config.total_laps,
            elapsed: self.state.clock,
            speed_kmh: HudState::speed_kmh(self.karts[self.player_idx].state.speed),
            rank: self.state.player_rank(&self.karts, &self.track),
            held_item: self.state.held_item,
        };
    }

    /// Puts every counter, kart, item box and effect back to the start of a race
    pub fn restart(&mut self) {
        info!("Resetting race");

        self.state.reset();
        for kart in &mut self.karts {
            kart.respawn(self.config.base_speed);
        }
        self.items.reset();
        self.camera.snap_to(&self.karts[self.player_idx].state);
        self.update_hud();
    }

    /// Takes effect on the next update
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!("AI difficulty set to {difficulty}");
        self.difficulty = difficulty;
    }

    /// Replaces the player's held item
    pub fn give_item(&mut self, item: ItemKind) {
        info!("Gave the player a {item}");
        self.state.held_item = Some(item);
        self.hud.held_item = Some(item);
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn config(&self) -> &RaceConfig {
        &self.config
    }

    #[must_use]
    pub const fn track(&self) -> &Track {
        &self.track
    }

    #[must_use]
    pub fn karts(&self) -> &[Kart] {
        &self.karts
    }

    #[must_use]
    pub fn player(&self) -> &Kart {
        &self.karts[self.player_idx]
    }

    #[must_use]
    pub fn player_mut(&mut self) -> &mut Kart {
        &mut self.karts[self.player_idx]
    }

    #[must_use]
    pub const fn items(&self) -> &ItemSystem {
        &self.items
    }

    #[must_use]
    pub const fn items_mut(&mut self) -> &mut ItemSystem {
        &mut self.items
    }

    #[must_use]
    pub const fn state(&self) -> &RaceState {
        &self.state
    }

    #[must_use]
    pub const fn hud(&self) -> &HudState {
        &self.hud
    }

    #[must_use]
    pub const fn camera(&self) -> &ChaseCamera {
        &self.camera
    }

    #[must_use]
    pub const fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
