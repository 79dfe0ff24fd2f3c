mod config;
mod contestant;
mod error;
mod game;
mod recording;
pub use config::*;
pub use contestant::*;
pub use error::*;
pub use game::*;
pub use recording::*;
