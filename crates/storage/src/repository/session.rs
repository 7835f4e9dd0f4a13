use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use crate::error::{Result, StorageError};
use crate::models::{CartSession, SessionPlayer};
use crate::traits::SessionStore;

#[derive(FromRow)]
struct SessionRow {
    session_id: String,
    name: String,
    players: Json<Vec<SessionPlayer>>,
    created_at: DateTime<Utc>,
}

impl From<SessionRow> for CartSession {
    fn from(row: SessionRow) -> Self {
        Self {
            id: row.session_id,
            name: row.name,
            players: row.players.0,
            created_at: row.created_at,
        }
    }
}

/// Append-only session log in the `scout_sessions` table.
#[derive(Debug, Clone)]
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn append(&self, namespace: &str, session: &CartSession) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO scout_sessions (session_id, namespace, name, players, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&session.id)
        .bind(namespace)
        .bind(&session.name)
        .bind(Json(&session.players))
        .bind(session.created_at)
        .execute(&self.pool)
        .await;

        match result.map_err(StorageError::from) {
            Ok(_) => Ok(()),
            Err(e) if e.is_unique_violation() => Err(StorageError::ConstraintViolation(format!(
                "session '{}' already exists",
                session.id
            ))),
            Err(e) => Err(e),
        }
    }

    async fn list(&self, namespace: &str) -> Result<Vec<CartSession>> {
        let rows: Vec<SessionRow> = sqlx::query_as(
            r#"
            SELECT session_id, name, players, created_at
            FROM scout_sessions
            WHERE namespace = $1
            ORDER BY seq
            "#,
        )
        .bind(namespace)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CartSession::from).collect())
    }
}
