use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CartSession, DataSnapshot};

/// Namespace saved scouting carts are stored under.
pub const SESSION_NAMESPACE: &str = "scout_sessions";

/// Supplies the player, play and score collections.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<DataSnapshot>;
}

/// Append-only persistence for saved carts.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn append(&self, namespace: &str, session: &CartSession) -> Result<()>;

    /// Sessions in the order they were appended.
    async fn list(&self, namespace: &str) -> Result<Vec<CartSession>>;
}
