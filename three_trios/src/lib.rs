pub use attack::*;
pub use card::*;
pub use errors::*;
pub use game::*;
pub use grid::*;
pub use player::*;
pub use slot::*;
pub use strategy::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod attack;
mod card;
mod errors;
mod game;
mod grid;
mod player;
mod slot;
mod strategy;
mod visualization;
