use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::DataSnapshot;
use crate::traits::DataSource;

use super::{play::PlayRepository, player::PlayerRepository, score::ScoreRepository};

/// Loads the three collections from Postgres in parallel.
#[derive(Debug, Clone)]
pub struct PgDataSource {
    pool: PgPool,
}

impl PgDataSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DataSource for PgDataSource {
    async fn fetch_snapshot(&self) -> Result<DataSnapshot> {
        let players = PlayerRepository::new(&self.pool);
        let plays = PlayRepository::new(&self.pool);
        let scores = ScoreRepository::new(&self.pool);

        let (players, plays, scores) =
            tokio::try_join!(players.list(), plays.list(), scores.list())?;

        Ok(DataSnapshot::new(players, plays, scores))
    }
}
