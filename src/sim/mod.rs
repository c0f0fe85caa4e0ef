pub mod ai;
mod camera;
mod debug;
mod difficulty;
mod frame_clock;
mod game_state;
mod hud;
mod input;
pub mod item;
pub mod kart;
mod race;
mod race_config;
mod race_state;
mod track;

pub use ai::*;
pub use camera::*;
pub use debug::*;
pub use difficulty::*;
pub use frame_clock::*;
pub use game_state::*;
pub use hud::*;
pub use input::*;
pub use item::*;
pub use kart::*;
pub use race::*;
pub use race_config::*;
pub use race_state::*;
pub use track::*;
