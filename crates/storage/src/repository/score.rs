use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sqlx::{FromRow, PgPool};

use crate::error::Result;
use crate::models::Score;

/// Sub-metrics and the composite are stored as NUMERIC.
#[derive(FromRow)]
struct ScoreRow {
    id: i64,
    created_at: DateTime<Utc>,
    play_id: i64,
    player_id: i64,
    release_speed: Option<Decimal>,
    route_fidelity: Option<Decimal>,
    leverage: Option<Decimal>,
    per_10_score: Option<Decimal>,
    notes: Option<String>,
}

impl From<ScoreRow> for Score {
    fn from(row: ScoreRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            play_id: row.play_id,
            player_id: row.player_id,
            release_speed: row.release_speed.map(decimal_to_f64),
            route_fidelity: row.route_fidelity.map(decimal_to_f64),
            leverage: row.leverage.map(decimal_to_f64),
            per_10_score: row.per_10_score.map(decimal_to_f64),
            notes: row.notes,
        }
    }
}

pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all scores, newest first
    pub async fn list(&self) -> Result<Vec<Score>> {
        let rows: Vec<ScoreRow> = sqlx::query_as(
            r#"
            SELECT id, created_at, play_id, player_id, release_speed,
                   route_fidelity, leverage, per_10_score, notes
            FROM scores
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Score::from).collect())
    }
}

fn decimal_to_f64(decimal: Decimal) -> f64 {
    decimal.to_f64().unwrap_or(f64::NAN)
}
