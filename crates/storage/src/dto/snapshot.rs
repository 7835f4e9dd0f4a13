use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::DataSnapshot;

/// Collection sizes of the snapshot currently being served.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SnapshotInfo {
    pub players: usize,
    pub plays: usize,
    pub scores: usize,
    pub fetched_at: DateTime<Utc>,
}

impl From<&DataSnapshot> for SnapshotInfo {
    fn from(snapshot: &DataSnapshot) -> Self {
        Self {
            players: snapshot.players.len(),
            plays: snapshot.plays.len(),
            scores: snapshot.scores.len(),
            fetched_at: snapshot.fetched_at,
        }
    }
}
