mod effect;
mod item_box;
mod item_kind;
mod item_system;

pub use effect::*;
pub use item_box::*;
pub use item_kind::*;
pub use item_system::*;
