use super::{
    ChaseCamera, Difficulty, Fireball, HudState, ItemBox, KartState, Race, RaceState,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KartInfo {
    pub idx: usize,
    pub state: KartState,
}

/// Everything a renderer needs to draw one frame
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub frame_count: u64,
    pub difficulty: Difficulty,
    pub race: RaceState,
    pub karts: Vec<KartInfo>,
    pub item_boxes: Vec<ItemBox>,
    pub fireballs: Vec<Fireball>,
    pub camera: ChaseCamera,
    pub hud: HudState,
}

impl Race {
    #[must_use]
    pub fn game_state(&self) -> GameState {
        GameState {
            frame_count: self.frame_count(),
            difficulty: self.difficulty(),
            race: *self.state(),
            karts: self
                .karts()
                .iter()
                .enumerate()
                .map(|(idx, kart)| KartInfo {
                    idx,
                    state: kart.state,
                })
                .collect(),
            item_boxes: self.items().boxes().to_vec(),
            fireballs: self.items().fireballs().to_vec(),
            camera: *self.camera(),
            hud: *self.hud(),
        }
    }
}
