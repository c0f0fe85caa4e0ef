use glam::Vec3A;
use kartsim::{
    Difficulty, ItemKind, Key, Race, RaceConfig, RaceEvent, consts,
    sim::{ChaseCamera, CheckpointProgress, FrameClock, HudState, Kart, RaceState, Track},
};

const DT: f32 = 1.0 / 64.0;

/// Teleports the player onto the next checkpoint and runs a frame there
fn visit_next_checkpoint(race: &mut Race) -> Vec<RaceEvent> {
    let next = race
        .track()
        .checkpoint_for(race.state().last_checkpoint)
        .pos;
    race.player_mut().state.pos = next;
    race.step(DT).to_vec()
}

#[test]
fn checkpoint_capture_radius_is_strict() {
    let track = Track::default();

    let mut state = RaceState::DEFAULT;
    let progress = state.check_checkpoint(Vec3A::new(30.0, 1.0, 14.9), &track, 15.0, 3);
    assert_eq!(progress, CheckpointProgress::Checkpoint { index: 0 });
    assert_eq!(state.last_checkpoint, 1);

    let mut state = RaceState::DEFAULT;
    let progress = state.check_checkpoint(Vec3A::new(30.0, 1.0, 15.1), &track, 15.0, 3);
    assert_eq!(progress, CheckpointProgress::None);
    assert_eq!(state.last_checkpoint, 0);
}

#[test]
fn a_full_loop_of_checkpoints_completes_a_lap() {
    let mut race = Race::new();
    assert_eq!(race.state().lap_count, 1);

    let mut events = Vec::new();
    for _ in 0..consts::track::CHECKPOINT_AMOUNT {
        events.extend(visit_next_checkpoint(&mut race));
    }

    assert_eq!(race.state().lap_count, 2);
    assert_eq!(race.state().last_checkpoint, 4);
    assert_eq!(race.hud().lap, 2);
    assert_eq!(
        events,
        [
            RaceEvent::CheckpointReached { index: 0 },
            RaceEvent::CheckpointReached { index: 1 },
            RaceEvent::CheckpointReached { index: 2 },
            RaceEvent::LapCompleted { lap: 2 },
        ]
    );
}

#[test]
fn checkpoints_must_be_taken_in_order() {
    let mut race = Race::new();
    race.step(DT);
    assert_eq!(race.state().last_checkpoint, 1);

    // Skipping ahead to checkpoint 2 does nothing
    race.player_mut().state.pos = race.track().checkpoints()[2].pos;
    race.step(DT);
    assert_eq!(race.state().last_checkpoint, 1);
}

#[test]
fn finishing_the_last_lap_resets_the_race() {
    let mut race = Race::new_with_config(RaceConfig {
        rng_seed: Some(5),
        ..RaceConfig::DEFAULT
    });

    let checkpoint_visits = consts::track::CHECKPOINT_AMOUNT * race.config().total_laps as usize;
    for _ in 1..checkpoint_visits {
        let events = visit_next_checkpoint(&mut race);
        assert!(!events.iter().any(|e| matches!(e, RaceEvent::RaceFinished { .. })));
    }
    assert_eq!(race.state().lap_count, 3);

    race.give_item(ItemKind::Star);
    let events = visit_next_checkpoint(&mut race);

    let finish_time = (checkpoint_visits - 1) as f32 * DT;
    assert!(events.contains(&RaceEvent::RaceFinished { time: finish_time }));

    let state = race.state();
    assert_eq!(state.lap_count, 1);
    assert_eq!(state.last_checkpoint, 0);
    assert_eq!(state.clock, 0.0);
    assert_eq!(state.held_item, None);

    for (kart, &spawn) in race.karts().iter().zip(&consts::kart::START_GRID) {
        assert_eq!(kart.state.pos, spawn);
        assert_eq!(kart.state.speed, 0.0);
        assert_eq!(kart.state.ai_target, 0);
    }

    assert_eq!(race.hud().lap, 1);
    assert_eq!(race.hud().held_item, None);
}

#[test]
fn restart_puts_everything_back() {
    let mut race = Race::new();
    race.input_mut().press(Key::Forward);
    for _ in 0..100 {
        race.step(DT);
    }
    assert!(race.state().clock > 0.0);

    race.restart();

    assert_eq!(*race.state(), RaceState::DEFAULT);
    for kart in race.karts() {
        assert_eq!(kart.state.pos, kart.spawn_pos());
        assert_eq!(kart.state.heading, 0.0);
    }
}

#[test]
fn kart_amount_is_clamped() {
    let solo = Race::new_with_config(RaceConfig {
        kart_amount: 0,
        ..RaceConfig::DEFAULT
    });
    assert_eq!(solo.karts().len(), 1);
    assert!(solo.player().is_player());

    let crowded = Race::new_with_config(RaceConfig {
        kart_amount: 10,
        ..RaceConfig::DEFAULT
    });
    assert_eq!(crowded.karts().len(), consts::kart::MAX_KARTS);
    assert_eq!(crowded.karts().iter().filter(|k| k.is_player()).count(), 1);
}

#[test]
fn frame_time_is_clamped() {
    let mut race = Race::new();
    race.step(1.0);
    assert_eq!(race.state().clock, consts::race::MAX_FRAME_TIME);

    race.step(-1.0);
    assert_eq!(race.state().clock, consts::race::MAX_FRAME_TIME);
}

#[test]
fn rank_counts_karts_ahead_of_the_player() {
    let track = Track::default();
    let state = RaceState::DEFAULT;

    // Ten units short of checkpoint 0
    let player = Kart::new_player(Vec3A::new(30.0, 1.0, 10.0), 0.5);

    let mut lap_ahead = Kart::new_ai(Vec3A::new(0.0, 1.0, 20.0), 0.5);
    lap_ahead.state.ai_target = 4;

    let closer = Kart::new_ai(Vec3A::new(30.0, 1.0, 5.0), 0.5);

    let mut behind = Kart::new_ai(Vec3A::new(0.0, 1.0, 20.0), 0.5);
    behind.state.ai_target = 1;

    let karts = [player, lap_ahead, closer, behind];
    assert_eq!(state.player_rank(&karts, &track), 3);

    let on_lap_two = RaceState {
        lap_count: 2,
        ..RaceState::DEFAULT
    };
    assert_eq!(on_lap_two.player_rank(&karts, &track), 1);
}

#[test]
fn camera_starts_behind_the_player_and_follows() {
    let mut race = Race::new();
    assert_eq!(race.camera().pos, Vec3A::new(30.0, 9.0, 10.0));
    assert_eq!(race.camera().look_at, race.player().state.pos);

    race.input_mut().press(Key::Forward);
    race.step(DT);

    let ideal = ChaseCamera::ideal_pos(&race.player().state);
    let camera = race.camera();
    assert!(camera.pos.distance(ideal) > 0.0);
    assert_eq!(camera.look_at, race.player().state.pos);
}

#[test]
fn hud_formats_time_and_speed() {
    assert_eq!(HudState::format_time(0.0), "0:00");
    assert_eq!(HudState::format_time(65.9), "1:05");
    assert_eq!(HudState::format_time(600.0), "10:00");
    assert_eq!(HudState::speed_kmh(-0.256), 26);
    assert_eq!(HudState::speed_kmh(0.5), 50);
}

#[test]
fn frame_clock_primes_skips_and_clamps() {
    let mut clock = FrameClock::new(consts::race::MIN_FRAME_TIME, consts::race::MAX_FRAME_TIME);

    assert_eq!(clock.tick(0.0), None);
    // A 120 Hz host only gets every other frame simulated
    assert_eq!(clock.tick(0.008), None);
    let dt = clock.tick(0.0158).expect("frame at 60 Hz pace runs");
    assert!((dt - 0.0158).abs() < 1e-6);

    assert_eq!(clock.tick(0.5), Some(0.016));
    // A timestamp going backwards is treated as no time passing
    assert_eq!(clock.tick(0.4), None);

    clock.reset();
    assert_eq!(clock.tick(1.0), None);
}

#[test]
fn skipped_frame_time_carries_into_the_next_frame() {
    let mut clock = FrameClock::new(consts::race::MIN_FRAME_TIME, consts::race::MAX_FRAME_TIME);
    clock.tick(0.0);

    assert_eq!(clock.tick(0.005), None);
    assert_eq!(clock.tick(0.010), None);
    let dt = clock.tick(0.015_7).expect("accumulated time reaches the minimum");
    assert!((dt - 0.015_7).abs() < 1e-6);

    // The next delta starts from the simulated frame, not the skipped ones
    let dt = clock.tick(0.032).expect("a full interval later runs");
    assert!((dt - 0.016).abs() < 1e-6);
}

#[test]
fn advance_drives_the_race_from_timestamps() {
    let mut race = Race::new();

    assert!(race.advance(10.0).is_none());
    assert!(race.advance(10.001).is_none());
    assert!(race.advance(10.01).is_none());
    assert!(race.advance(10.017).is_some());
    assert!(race.state().clock > 0.0);
    assert_eq!(race.frame_count(), 1);
}

#[test]
fn difficulty_change_applies_to_next_frame() {
    let mut race = Race::new();
    assert_eq!(race.difficulty(), Difficulty::Medium);

    race.set_difficulty(Difficulty::Hard);
    assert_eq!(race.difficulty(), Difficulty::Hard);
    assert_eq!(race.game_state().difficulty, Difficulty::Hard);
}
