pub mod file;
pub mod memory;
pub mod play;
pub mod player;
pub mod score;
pub mod session;
pub mod snapshot;
