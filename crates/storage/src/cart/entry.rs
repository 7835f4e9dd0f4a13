use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::player::PlayerWithAggregates;
use crate::models::Position;

/// Snapshot of a ranked player taken when it entered the cart.
///
/// Later score changes do not reach this copy; only `notes` is mutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartEntry {
    pub id: i64,
    pub name: String,
    pub position: Position,
    pub number: i32,
    pub team: String,
    pub avatar_url: Option<String>,

    pub avg_per_10: f64,
    pub avg_aftersnap_iq: f64,
    pub total_plays_tagged: usize,
    pub archetype_tags: Vec<String>,

    pub notes: String,
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    pub fn from_ranked(player: &PlayerWithAggregates, archetype_tags: Vec<String>) -> Self {
        Self {
            id: player.player.id,
            name: player.player.name.clone(),
            position: player.player.position,
            number: player.player.number,
            team: player.player.team.clone(),
            avatar_url: player.player.avatar_url.clone(),
            avg_per_10: player.average_per_10,
            avg_aftersnap_iq: f64::from(player.average_iq),
            total_plays_tagged: player.score_count,
            archetype_tags,
            notes: String::new(),
            added_at: Utc::now(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}
