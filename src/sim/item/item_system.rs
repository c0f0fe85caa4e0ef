use ahash::AHashMap;
use fastrand::Rng;
use glam::Vec3A;
use log::debug;

use crate::{
    consts::items::fireball,
    sim::{Kart, KartState, RaceConfig},
};

use super::{ActiveEffect, EffectKind, Fireball, ItemBox, ItemKind};

/// Item boxes, timed kart effects and fireball visuals.
///
/// Every timer runs on the race clock and is checked from [`ItemSystem::update`], so
/// [`ItemSystem::reset`] leaves nothing pending.
#[derive(Debug)]
pub struct ItemSystem {
    boxes: Vec<ItemBox>,
    /// At most one effect of each kind per kart, reapplying replaces the old one
    effects: AHashMap<(usize, EffectKind), ActiveEffect>,
    fireballs: Vec<Fireball>,
    rng: Rng,
}

impl ItemSystem {
    #[must_use]
    pub fn new(config: &RaceConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };

        Self {
            boxes: config
                .item_box_locations()
                .into_iter()
                .map(ItemBox::new)
                .collect(),
            effects: AHashMap::new(),
            fireballs: Vec::new(),
            rng,
        }
    }

    #[must_use]
    pub fn boxes(&self) -> &[ItemBox] {
        &self.boxes
    }

    #[must_use]
    pub fn boxes_mut(&mut self) -> &mut [ItemBox] {
        &mut self.boxes
    }

    #[must_use]
    pub fn fireballs(&self) -> &[Fireball] {
        &self.fireballs
    }

    pub fn effects(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.values()
    }

    #[must_use]
    pub fn effect(&self, kart_idx: usize, kind: EffectKind) -> Option<&ActiveEffect> {
        self.effects.get(&(kart_idx, kind))
    }

    /// Strongest speed multiplier currently applied to a kart
    #[must_use]
    pub fn speed_scale(&self, kart_idx: usize) -> f32 {
        self.effects
            .values()
            .filter(|effect| effect.kart_idx == kart_idx)
            .map(|effect| effect.kind.speed_scale())
            .fold(1.0, f32::max)
    }

    /// Rolls a uniformly random item
    pub fn roll_item(&mut self) -> ItemKind {
        ItemKind::ALL[self.rng.usize(..ItemKind::ALL.len())]
    }

    /// Collects every visible box the player overlaps.
    ///
    /// Returns the item granted by the last box collected this frame.
    pub fn check_pickups(&mut self, player_pos: Vec3A, now: f32, config: &RaceConfig) -> Option<ItemKind> {
        let mut granted = None;

        for idx in 0..self.boxes.len() {
            if self.boxes[idx].try_collect(
                player_pos,
                config.pickup_radius,
                now,
                config.item_respawn_time,
            ) {
                let item = self.roll_item();
                debug!("Item box {idx} collected, rolled {item}");
                granted = Some(item);
            }
        }

        granted
    }

    /// Applies `item` to the kart that used it
    pub fn use_item(&mut self, item: ItemKind, kart_idx: usize, kart: &mut KartState, now: f32) {
        debug!("Kart {kart_idx} used {item}");

        match item.effect() {
            Some(kind) => self.apply_effect(kind, kart_idx, kart, now),
            None => self.fireballs.push(Fireball {
                pos: kart.pos + kart.forward_dir() * fireball::FORWARD_OFFSET,
                expires_at: now + fireball::LIFETIME,
            }),
        }
    }

    fn apply_effect(&mut self, kind: EffectKind, kart_idx: usize, kart: &mut KartState, now: f32) {
        let effect = ActiveEffect {
            kart_idx,
            kind,
            expires_at: now + kind.duration(),
            restore_max_speed: kart.base_max_speed,
        };

        if self.effects.insert((kart_idx, kind), effect).is_some() {
            debug!("Refreshed {kind:?} on kart {kart_idx}");
        }

        if kind == EffectKind::Invincibility {
            kart.invincible = true;
        }

        kart.refresh_max_speed(self.speed_scale(kart_idx));
    }

    /// Runs every per-frame item timer: box respawns and spin, effect and fireball expiry
    pub fn update(&mut self, karts: &mut [Kart], now: f32) {
        for item_box in &mut self.boxes {
            item_box.update(now);
        }

        self.expire_effects(karts, now);
        self.fireballs.retain(|fireball| now < fireball.expires_at);
    }

    fn expire_effects(&mut self, karts: &mut [Kart], now: f32) {
        let mut expired = Vec::new();
        self.effects.retain(|_, effect| {
            let is_expired = effect.is_expired(now);
            if is_expired {
                expired.push(*effect);
            }
            !is_expired
        });

        for effect in expired {
            let Some(kart) = karts.get_mut(effect.kart_idx) else {
                continue;
            };

            debug!("{:?} ended on kart {}", effect.kind, effect.kart_idx);

            // Effects that are still running keep their boost on top of the restored cap
            kart.state.max_speed = effect.restore_max_speed * self.speed_scale(effect.kart_idx);
            kart.state.speed = kart
                .state
                .speed
                .clamp(kart.state.min_speed(), kart.state.max_speed);
            if effect.kind == EffectKind::Invincibility {
                kart.state.invincible = false;
            }
        }
    }

    /// Clears every effect and fireball and puts all boxes back
    pub fn reset(&mut self) {
        for item_box in &mut self.boxes {
            item_box.reset();
        }

        self.effects.clear();
        self.fireballs.clear();
    }
}
