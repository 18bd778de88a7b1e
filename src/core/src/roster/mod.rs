pub mod generator;
pub mod player;
pub mod roster;

pub use generator::*;
pub use player::*;
pub use roster::*;
