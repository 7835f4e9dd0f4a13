use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Snap context a score refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Play {
    pub id: i64,
    pub game_id: i64,
    pub quarter: i16,
    pub time_remaining: String,
    pub down: i16,
    pub distance: i16,
    pub defensive_scheme: Option<String>,
    pub created_at: DateTime<Utc>,
}
