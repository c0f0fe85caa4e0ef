//! Little-endian binary encoding of [`GameState`] for an external renderer process.
//!
//! A frame is the magic, a version, then the race counters, karts, item boxes,
//! fireballs, camera and HUD in that order. Lists are prefixed by a `u16` length.

use std::io::{self, Cursor, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use glam::Vec3A;
use thiserror::Error;

use crate::sim::{
    ChaseCamera, Difficulty, Fireball, GameState, HudState, ItemBox, ItemKind, KartInfo,
    KartState, RaceState,
};

/// "KART" read as a little-endian `u32`
pub const FRAME_MAGIC: u32 = u32::from_le_bytes(*b"KART");
pub const FRAME_VERSION: u16 = 1;

const NO_ITEM: u8 = u8::MAX;

#[derive(Debug, Error)]
pub enum FrameDecodeError {
    #[error("truncated frame: {0}")]
    Truncated(#[from] io::Error),
    #[error("bad frame magic {0:#010x}")]
    BadMagic(u32),
    #[error("unsupported frame version {0}, expected {FRAME_VERSION}")]
    UnsupportedVersion(u16),
    #[error("invalid item id {0}")]
    InvalidItem(u8),
    #[error("invalid difficulty id {0}")]
    InvalidDifficulty(u8),
    #[error("{0} trailing bytes after frame")]
    TrailingBytes(usize),
}

fn too_large(what: &str, value: usize) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{what} {value} does not fit in the frame format"),
    )
}

trait ToWriter {
    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()>;
}

trait FromCursor: Sized {
    fn from_cursor(bytes: &mut Cursor<&[u8]>) -> Result<Self, FrameDecodeError>;
}

impl ToWriter for Vec3A {
    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_f32::<LittleEndian>(self.x)?;
        writer.write_f32::<LittleEndian>(self.y)?;
        writer.write_f32::<LittleEndian>(self.z)
    }
}

impl FromCursor for Vec3A {
    fn from_cursor(bytes: &mut Cursor<&[u8]>) -> Result<Self, FrameDecodeError> {
        Ok(Self::new(
            bytes.read_f32::<LittleEndian>()?,
            bytes.read_f32::<LittleEndian>()?,
            bytes.read_f32::<LittleEndian>()?,
        ))
    }
}

impl ToWriter for Option<ItemKind> {
    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u8(self.map_or(NO_ITEM, ItemKind::to_u8))
    }
}

impl FromCursor for Option<ItemKind> {
    fn from_cursor(bytes: &mut Cursor<&[u8]>) -> Result<Self, FrameDecodeError> {
        match bytes.read_u8()? {
            NO_ITEM => Ok(None),
            id => ItemKind::from_u8(id)
                .map(Some)
                .ok_or(FrameDecodeError::InvalidItem(id)),
        }
    }
}

impl ToWriter for RaceState {
    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u32::<LittleEndian>(self.lap_count)?;
        let last_checkpoint = u32::try_from(self.last_checkpoint)
            .map_err(|_| too_large("checkpoint index", self.last_checkpoint))?;
        writer.write_u32::<LittleEndian>(last_checkpoint)?;
        writer.write_f32::<LittleEndian>(self.clock)?;
        self.held_item.write_to(writer)
    }
}

impl FromCursor for RaceState {
    fn from_cursor(bytes: &mut Cursor<&[u8]>) -> Result<Self, FrameDecodeError> {
        Ok(Self {
            lap_count: bytes.read_u32::<LittleEndian>()?,
            last_checkpoint: bytes.read_u32::<LittleEndian>()? as usize,
            clock: bytes.read_f32::<LittleEndian>()?,
            held_item: Option::<ItemKind>::from_cursor(bytes)?,
        })
    }
}

impl ToWriter for KartState {
    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.pos.write_to(writer)?;
        for value in [
            self.heading,
            self.speed,
            self.turn_rate,
            self.max_speed,
            self.base_max_speed,
            self.drift_time,
            self.wheel_spin,
        ] {
            writer.write_f32::<LittleEndian>(value)?;
        }
        let ai_target =
            u32::try_from(self.ai_target).map_err(|_| too_large("AI target", self.ai_target))?;
        writer.write_u32::<LittleEndian>(ai_target)?;
        writer.write_u8(u8::from(self.is_player) | (u8::from(self.invincible) << 1))
    }
}

impl FromCursor for KartState {
    fn from_cursor(bytes: &mut Cursor<&[u8]>) -> Result<Self, FrameDecodeError> {
        let pos = Vec3A::from_cursor(bytes)?;
        let mut floats = [0.0; 7];
        bytes.read_f32_into::<LittleEndian>(&mut floats)?;
        let [heading, speed, turn_rate, max_speed, base_max_speed, drift_time, wheel_spin] = floats;
        let ai_target = bytes.read_u32::<LittleEndian>()? as usize;
        let flags = bytes.read_u8()?;

        Ok(Self {
            pos,
            heading,
            speed,
            turn_rate,
            max_speed,
            base_max_speed,
            drift_time,
            is_player: flags & 1 != 0,
            ai_target,
            invincible: flags & 2 != 0,
            wheel_spin,
        })
    }
}

impl ToWriter for ItemBox {
    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.pos.write_to(writer)?;
        writer.write_f32::<LittleEndian>(self.yaw)?;
        writer.write_f32::<LittleEndian>(self.pitch)?;
        writer.write_u8(u8::from(self.collected))?;
        // a negative deadline means none is pending
        writer.write_f32::<LittleEndian>(self.respawn_at.unwrap_or(-1.0))
    }
}

impl FromCursor for ItemBox {
    fn from_cursor(bytes: &mut Cursor<&[u8]>) -> Result<Self, FrameDecodeError> {
        let pos = Vec3A::from_cursor(bytes)?;
        let yaw = bytes.read_f32::<LittleEndian>()?;
        let pitch = bytes.read_f32::<LittleEndian>()?;
        let collected = bytes.read_u8()? != 0;
        let respawn_at = bytes.read_f32::<LittleEndian>()?;

        Ok(Self {
            pos,
            collected,
            respawn_at: (respawn_at >= 0.0).then_some(respawn_at),
            yaw,
            pitch,
        })
    }
}

impl ToWriter for Fireball {
    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.pos.write_to(writer)?;
        writer.write_f32::<LittleEndian>(self.expires_at)
    }
}

impl FromCursor for Fireball {
    fn from_cursor(bytes: &mut Cursor<&[u8]>) -> Result<Self, FrameDecodeError> {
        Ok(Self {
            pos: Vec3A::from_cursor(bytes)?,
            expires_at: bytes.read_f32::<LittleEndian>()?,
        })
    }
}

impl ToWriter for HudState {
    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u32::<LittleEndian>(self.lap)?;
        writer.write_u32::<LittleEndian>(self.total_laps)?;
        writer.write_f32::<LittleEndian>(self.elapsed)?;
        writer.write_u32::<LittleEndian>(self.speed_kmh)?;
        writer.write_u8(u8::try_from(self.rank).map_err(|_| too_large("rank", self.rank))?)?;
        self.held_item.write_to(writer)
    }
}

impl FromCursor for HudState {
    fn from_cursor(bytes: &mut Cursor<&[u8]>) -> Result<Self, FrameDecodeError> {
        Ok(Self {
            lap: bytes.read_u32::<LittleEndian>()?,
            total_laps: bytes.read_u32::<LittleEndian>()?,
            elapsed: bytes.read_f32::<LittleEndian>()?,
            speed_kmh: bytes.read_u32::<LittleEndian>()?,
            rank: bytes.read_u8()? as usize,
            held_item: Option::<ItemKind>::from_cursor(bytes)?,
        })
    }
}

fn write_list<W: Write, T: ToWriter>(writer: &mut W, items: &[T]) -> io::Result<()> {
    let len = u16::try_from(items.len()).map_err(|_| too_large("list length", items.len()))?;
    writer.write_u16::<LittleEndian>(len)?;
    items.iter().try_for_each(|item| item.write_to(writer))
}

fn read_list<T: FromCursor>(bytes: &mut Cursor<&[u8]>) -> Result<Vec<T>, FrameDecodeError> {
    let len = bytes.read_u16::<LittleEndian>()?;
    (0..len).map(|_| T::from_cursor(bytes)).collect()
}

/// Writes one frame for `state`.
///
/// Fails with [`io::ErrorKind::InvalidInput`] when a list is longer than `u16::MAX`
/// or the HUD rank does not fit in a byte.
pub fn write_frame<W: Write>(writer: &mut W, state: &GameState) -> io::Result<()> {
    writer.write_u32::<LittleEndian>(FRAME_MAGIC)?;
    writer.write_u16::<LittleEndian>(FRAME_VERSION)?;
    writer.write_u64::<LittleEndian>(state.frame_count)?;
    writer.write_u8(state.difficulty as u8)?;
    state.race.write_to(writer)?;

    let karts = state.karts.iter().map(|info| info.state).collect::<Vec<_>>();
    write_list(writer, &karts)?;
    write_list(writer, &state.item_boxes)?;
    write_list(writer, &state.fireballs)?;

    state.camera.pos.write_to(writer)?;
    state.camera.look_at.write_to(writer)?;
    state.hud.write_to(writer)
}

pub fn encode(state: &GameState) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(256);
    write_frame(&mut bytes, state)?;
    Ok(bytes)
}

/// Reads one frame, which must span all of `bytes`
pub fn decode(bytes: &[u8]) -> Result<GameState, FrameDecodeError> {
    let mut bytes = Cursor::new(bytes);

    let magic = bytes.read_u32::<LittleEndian>()?;
    if magic != FRAME_MAGIC {
        return Err(FrameDecodeError::BadMagic(magic));
    }

    let version = bytes.read_u16::<LittleEndian>()?;
    if version != FRAME_VERSION {
        return Err(FrameDecodeError::UnsupportedVersion(version));
    }

    let frame_count = bytes.read_u64::<LittleEndian>()?;
    let difficulty_id = bytes.read_u8()?;
    let difficulty = Difficulty::ALL
        .get(usize::from(difficulty_id))
        .copied()
        .ok_or(FrameDecodeError::InvalidDifficulty(difficulty_id))?;
    let race = RaceState::from_cursor(&mut bytes)?;

    let karts = read_list::<KartState>(&mut bytes)?
        .into_iter()
        .enumerate()
        .map(|(idx, state)| KartInfo { idx, state })
        .collect();
    let item_boxes = read_list(&mut bytes)?;
    let fireballs = read_list(&mut bytes)?;

    let camera = ChaseCamera {
        pos: Vec3A::from_cursor(&mut bytes)?,
        look_at: Vec3A::from_cursor(&mut bytes)?,
    };
    let hud = HudState::from_cursor(&mut bytes)?;

    let trailing = bytes.get_ref().len() - bytes.position() as usize;
    if trailing != 0 {
        return Err(FrameDecodeError::TrailingBytes(trailing));
    }

    Ok(GameState {
        frame_count,
        difficulty,
        race,
        karts,
        item_boxes,
        fireballs,
        camera,
        hud,
    })
}
