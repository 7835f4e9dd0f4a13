pub mod cart;
pub mod common;
pub mod player;
pub mod score;
pub mod snapshot;
pub mod summary;
