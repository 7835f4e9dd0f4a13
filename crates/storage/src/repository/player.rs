use sqlx::{FromRow, PgPool};

use crate::error::{Result, StorageError};
use crate::models::{Player, Position};

#[derive(FromRow)]
struct PlayerRow {
    id: i64,
    name: String,
    team: String,
    position: String,
    number: i32,
    avatar_url: Option<String>,
}

impl TryFrom<PlayerRow> for Player {
    type Error = StorageError;

    fn try_from(row: PlayerRow) -> Result<Self> {
        Ok(Self {
            id: row.id,
            name: row.name,
            team: row.team,
            position: row.position.parse::<Position>()?,
            number: row.number,
            avatar_url: row.avatar_url,
        })
    }
}

pub struct PlayerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all players ordered by name
    pub async fn list(&self) -> Result<Vec<Player>> {
        let rows: Vec<PlayerRow> = sqlx::query_as(
            r#"
            SELECT id, name, team, position, number, avatar_url
            FROM players
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Player::try_from).collect()
    }
}
