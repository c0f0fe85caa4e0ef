use glam::Vec3A;
use kartsim::{
    Difficulty, RaceConfig,
    sim::{
        AiController, DriveAction, DriveContext, InputState, Kart, KartController, KartState,
        Track, apply_rubber_band, rubber_band_scale,
    },
};

const DT: f32 = 1.0 / 64.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn ai_kart(pos: Vec3A, speed: f32) -> KartState {
    KartState {
        speed,
        ..KartState::spawned_at(pos, false, RaceConfig::DEFAULT.base_speed)
    }
}

/// Runs one AI update for a kart alone on the track, or among `others`
fn drive_ai(state: &mut KartState, others: &[Vec3A], difficulty: Difficulty) -> DriveAction {
    let input = InputState::DEFAULT;
    let track = Track::default();
    let config = RaceConfig::DEFAULT;

    let mut kart_positions = vec![state.pos];
    kart_positions.extend_from_slice(others);

    let ctx = DriveContext {
        input: &input,
        track: &track,
        kart_positions: &kart_positions,
        kart_idx: 0,
        difficulty,
        config: &config,
        has_held_item: false,
        dt: DT,
    };

    AiController.drive(state, &ctx)
}

#[test]
fn captures_checkpoint_strictly_inside_radius() {
    // Checkpoint 0 sits at (30, 1, 0)
    let mut inside = ai_kart(Vec3A::new(30.0, 1.0, 14.9), 0.3);
    drive_ai(&mut inside, &[], Difficulty::Medium);
    assert_eq!(inside.ai_target, 1);

    let mut outside = ai_kart(Vec3A::new(30.0, 1.0, 15.1), 0.3);
    drive_ai(&mut outside, &[], Difficulty::Medium);
    assert_eq!(outside.ai_target, 0);
}

#[test]
fn ai_never_uses_items() {
    let mut kart = ai_kart(Vec3A::new(0.0, 1.0, 20.0), 0.3);
    assert_eq!(drive_ai(&mut kart, &[], Difficulty::Hard), DriveAction::Drive);
}

#[test]
fn aligned_ai_accelerates_from_the_speed_floor() {
    // Facing -Z straight at checkpoint 0
    let mut kart = ai_kart(Vec3A::new(30.0, 1.0, 20.0), 0.0);
    drive_ai(&mut kart, &[], Difficulty::Easy);

    assert!(approx_eq(kart.speed, 0.1));
    assert_eq!(kart.turn_rate, 0.0);

    kart.speed = 0.29;
    drive_ai(&mut kart, &[], Difficulty::Easy);
    // Easy caps at 0.5 * 0.6
    assert!(approx_eq(kart.speed, 0.3));
}

#[test]
fn misaligned_ai_brakes_to_the_slow_cap() {
    // Facing -Z while the checkpoint is behind
    let mut kart = ai_kart(Vec3A::new(30.0, 1.0, -20.0), 0.5);
    drive_ai(&mut kart, &[], Difficulty::Hard);

    assert!(approx_eq(kart.speed, 0.49));

    kart.speed = 0.05;
    drive_ai(&mut kart, &[], Difficulty::Hard);
    assert!(approx_eq(kart.speed, 0.15));
}

#[test]
fn ai_turns_toward_the_target() {
    // Checkpoint 0 is off to the right (+X) of a kart facing -Z
    let mut kart = ai_kart(Vec3A::new(10.0, 1.0, 0.0), 0.2);
    drive_ai(&mut kart, &[], Difficulty::Medium);
    assert!(kart.turn_rate < 0.0);

    let mut kart = ai_kart(Vec3A::new(50.0, 1.0, 0.0), 0.2);
    drive_ai(&mut kart, &[], Difficulty::Medium);
    assert!(kart.turn_rate > 0.0);
}

#[test]
fn fast_ai_drifts_through_hard_corners() {
    let mut kart = ai_kart(Vec3A::new(10.0, 1.0, 0.0), 0.35);
    drive_ai(&mut kart, &[], Difficulty::Hard);

    assert!(approx_eq(kart.turn_rate, -0.03 * 1.5 * 0.8));
    assert_eq!(kart.drift_time, DT);
}

#[test]
fn ai_sidesteps_nearby_karts() {
    let start = Vec3A::new(0.0, 1.0, 20.0);
    let other = Vec3A::new(2.0, 1.0, 20.0);

    let mut alone = ai_kart(start, 0.3);
    drive_ai(&mut alone, &[], Difficulty::Medium);

    let mut crowded = ai_kart(start, 0.3);
    drive_ai(&mut crowded, &[other], Difficulty::Medium);

    let nudge = crowded.pos - start;
    assert!(approx_eq(nudge.length(), 0.1));
    assert!(approx_eq(nudge.dot(other - start), 0.0));
    assert!(approx_eq(crowded.speed, alone.speed * 0.95));
}

#[test]
fn ai_ignores_distant_karts() {
    let start = Vec3A::new(0.0, 1.0, 20.0);
    let mut kart = ai_kart(start, 0.3);
    drive_ai(&mut kart, &[Vec3A::new(6.0, 1.0, 20.0)], Difficulty::Medium);

    assert_eq!(kart.pos, start);
}

#[test]
fn ai_is_pulled_back_inside_bounds() {
    let start = Vec3A::new(60.0, 0.0, 0.0);
    let mut kart = ai_kart(start, 0.3);
    drive_ai(&mut kart, &[], Difficulty::Medium);

    assert!(approx_eq(kart.pos.length(), 59.8));
}

#[test]
fn rubber_band_bands() {
    assert_eq!(rubber_band_scale(30.5), 1.2);
    assert_eq!(rubber_band_scale(30.0), 1.0);
    assert_eq!(rubber_band_scale(20.0), 1.0);
    assert_eq!(rubber_band_scale(10.0), 1.0);
    assert_eq!(rubber_band_scale(9.5), 0.9);
}

#[test]
fn rubber_band_rewrites_ai_base_speed_only() {
    let mut karts = vec![
        Kart::new_player(Vec3A::ZERO, 0.5),
        Kart::new_ai(Vec3A::new(40.0, 0.0, 0.0), 0.5),
        Kart::new_ai(Vec3A::new(5.0, 0.0, 0.0), 0.5),
        Kart::new_ai(Vec3A::new(0.0, 0.0, 20.0), 0.5),
    ];

    apply_rubber_band(&mut karts, 0.5);

    assert_eq!(karts[0].state.base_max_speed, 0.5);
    assert!(approx_eq(karts[1].state.base_max_speed, 0.6));
    assert!(approx_eq(karts[2].state.base_max_speed, 0.45));
    assert_eq!(karts[3].state.base_max_speed, 0.5);
}

#[test]
fn difficulty_profiles() {
    let easy = Difficulty::Easy.profile();
    assert_eq!((easy.max_speed_ratio, easy.turn_accuracy), (0.6, 0.8));

    let hard = Difficulty::Hard.profile();
    assert_eq!((hard.max_speed_ratio, hard.turn_accuracy), (1.0, 0.95));

    assert_eq!(Difficulty::default(), Difficulty::Medium);
    assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
    assert!("insane".parse::<Difficulty>().is_err());
}
