use std::io;

use kartsim::{
    ItemKind, Key, Race, RaceConfig,
    render_frame::{self, FRAME_MAGIC, FrameDecodeError},
};

fn busy_race() -> Race {
    let mut race = Race::new_with_config(RaceConfig {
        rng_seed: Some(9),
        ..RaceConfig::DEFAULT
    });

    race.give_item(ItemKind::Fireball);
    race.input_mut().press(Key::Forward);
    race.input_mut().press(Key::UseItem);
    for _ in 0..20 {
        race.step(1.0 / 64.0);
    }
    race.items_mut().boxes_mut()[1].collected = true;
    race.items_mut().boxes_mut()[1].respawn_at = Some(12.5);
    race.give_item(ItemKind::Star);

    race
}

#[test]
fn decodes_an_encoded_frame() {
    let race = busy_race();
    let state = race.game_state();
    assert_eq!(state.fireballs.len(), 1);

    let bytes = render_frame::encode(&state).unwrap();
    assert_eq!(&bytes[..4], b"KART");

    let decoded = render_frame::decode(&bytes).unwrap();
    assert_eq!(decoded, state);
}

#[test]
fn rejects_bad_magic() {
    let mut bytes = render_frame::encode(&busy_race().game_state()).unwrap();
    bytes[0] = b'X';

    assert!(matches!(
        render_frame::decode(&bytes),
        Err(FrameDecodeError::BadMagic(magic)) if magic != FRAME_MAGIC
    ));
}

#[test]
fn rejects_unknown_version() {
    let mut bytes = render_frame::encode(&busy_race().game_state()).unwrap();
    bytes[4] = 99;

    assert!(matches!(
        render_frame::decode(&bytes),
        Err(FrameDecodeError::UnsupportedVersion(99))
    ));
}

#[test]
fn rejects_truncated_and_padded_frames() {
    let mut bytes = render_frame::encode(&busy_race().game_state()).unwrap();

    assert!(matches!(
        render_frame::decode(&bytes[..bytes.len() - 1]),
        Err(FrameDecodeError::Truncated(_))
    ));

    bytes.push(0);
    assert!(matches!(
        render_frame::decode(&bytes),
        Err(FrameDecodeError::TrailingBytes(1))
    ));
}

#[test]
fn refuses_lists_longer_than_the_length_prefix() {
    let mut state = busy_race().game_state();
    let fireball = state.fireballs[0];
    state.fireballs = vec![fireball; usize::from(u16::MAX) + 1];

    let err = render_frame::encode(&state).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

    state.fireballs.truncate(usize::from(u16::MAX));
    let bytes = render_frame::encode(&state).unwrap();
    let decoded = render_frame::decode(&bytes).unwrap();
    assert_eq!(decoded.fireballs.len(), usize::from(u16::MAX));
}

#[test]
fn refuses_a_rank_that_does_not_fit_in_a_byte() {
    let mut state = busy_race().game_state();
    state.hud.rank = 300;

    let mut bytes = Vec::new();
    let err = render_frame::write_frame(&mut bytes, &state).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

    state.hud.rank = usize::from(u8::MAX);
    let decoded = render_frame::decode(&render_frame::encode(&state).unwrap()).unwrap();
    assert_eq!(decoded.hud.rank, usize::from(u8::MAX));
}
