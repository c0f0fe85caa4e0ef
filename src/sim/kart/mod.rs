mod controller;
#[allow(clippy::module_inception)]
mod kart;
mod kart_state;
mod physics;

pub use controller::*;
pub use kart::*;
pub use kart_state::*;
pub use physics::*;
