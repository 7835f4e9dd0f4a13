pub mod play;
pub mod player;
pub mod score;
pub mod session;
pub mod snapshot;

pub use play::Play;
pub use player::{Player, Position};
pub use score::Score;
pub use session::{CartSession, SessionPlayer};
pub use snapshot::DataSnapshot;
