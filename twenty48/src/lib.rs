pub use board::*;
pub use config::*;
pub use direction::*;
pub use errors::*;
pub use protocol_types::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod config;
mod direction;
mod errors;
mod protocol_types;
mod visualization;
