mod game;
mod strategy;
pub use game::*;
pub use strategy::*;
