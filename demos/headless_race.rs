//! Drives a race without a renderer: the player holds the throttle and steers
//! toward the next checkpoint while the AI karts race around the oval.

use kartsim::{
    Key, Race, RaceConfig, RaceEvent, logging, render_frame,
    sim::{Steer, Track},
};

const FRAME_TIME: f64 = 1.0 / 60.0;
const MAX_SECONDS: f64 = 180.0;

fn steer_toward_checkpoint(race: &Race) -> Steer {
    let player = &race.player().state;
    let target = race
        .track()
        .checkpoint_for(race.state().last_checkpoint)
        .pos;
    let deviation = player.forward_dir().cross((target - player.pos).normalize_or_zero()).y;

    if deviation > 0.05 {
        Steer::Left
    } else if deviation < -0.05 {
        Steer::Right
    } else {
        Steer::Straight
    }
}

fn main() {
    let _ = logging::try_init();

    let config = RaceConfig {
        rng_seed: Some(7),
        ..RaceConfig::DEFAULT
    };
    let mut race = Race::new_with_track(config, Track::default());
    race.input_mut().press(Key::Forward);

    let mut frame_bytes = 0;
    let mut timestamp = 0.0;
    while timestamp < MAX_SECONDS {
        let steer = steer_toward_checkpoint(&race);
        let has_item = race.state().held_item.is_some();
        let input = race.input_mut();
        input.set(Key::Left, steer == Steer::Left);
        input.set(Key::Right, steer == Steer::Right);
        input.set(Key::UseItem, has_item);

        timestamp += FRAME_TIME;
        let Some(events) = race.advance(timestamp) else {
            continue;
        };

        match render_frame::encode(&race.game_state()) {
            Ok(bytes) => frame_bytes += bytes.len(),
            Err(err) => eprintln!("failed to encode frame {}: {err}", race.frame_count()),
        }

        for event in events {
            match event {
                RaceEvent::ItemCollected(item) => println!("picked up {} {item}", item.icon()),
                RaceEvent::LapCompleted { lap } => {
                    let hud = race.hud();
                    println!("lap {lap}/{} at {}, rank {}", hud.total_laps, hud.time_text(), hud.rank);
                }
                RaceEvent::RaceFinished { time } => {
                    println!("finished in {time:.2}s, streamed {frame_bytes} bytes of frames");
                    return;
                }
                _ => {}
            }
        }

        if race.frame_count() % 600 == 0 {
            let hud = race.hud();
            println!("{} | {} km/h | rank {}", hud.time_text(), hud.speed_kmh, hud.rank);
        }
    }

    println!("no finish after {MAX_SECONDS}s, {}", race.debug_snapshot());
}
