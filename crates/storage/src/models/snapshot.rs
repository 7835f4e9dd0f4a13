use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::{Play, Player, Score};

/// Immutable view of the three record collections as returned by one fetch.
///
/// Collections are shared behind `Arc` so a snapshot can be handed to many
/// readers and replaced wholesale on refresh; nothing ever mutates it.
#[derive(Debug, Clone)]
pub struct DataSnapshot {
    pub players: Arc<[Player]>,
    pub plays: Arc<[Play]>,
    pub scores: Arc<[Score]>,
    pub fetched_at: DateTime<Utc>,
}

impl DataSnapshot {
    pub fn new(players: Vec<Player>, plays: Vec<Play>, scores: Vec<Score>) -> Self {
        Self {
            players: players.into(),
            plays: plays.into(),
            scores: scores.into(),
            fetched_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }

    pub fn player(&self, player_id: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn play(&self, play_id: i64) -> Option<&Play> {
        self.plays.iter().find(|p| p.id == play_id)
    }
}

impl Default for DataSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
