use sqlx::PgPool;

use crate::error::Result;
use crate::models::Play;

pub struct PlayRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlayRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all plays, newest first
    pub async fn list(&self) -> Result<Vec<Play>> {
        let plays = sqlx::query_as::<_, Play>(
            r#"
            SELECT id, game_id, quarter, time_remaining, down, distance,
                   defensive_scheme, created_at
            FROM plays
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(plays)
    }
}
