pub mod consts;
pub mod logging;
pub mod render_frame;
pub mod sim;

pub use sim::{
    DebugCommand, DebugCommandError, Difficulty, GameState, ItemKind, Key, Race, RaceConfig,
    RaceEvent,
};
