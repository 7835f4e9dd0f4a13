use serde::Serialize;
use utoipa::ToSchema;

use super::player::PlayerWithAggregates;

/// Tagging session overview shown after a grading pass.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionSummary {
    pub plays_annotated: usize,
    pub unique_players: usize,
    pub quick_instinct_count: usize,
    pub red_flag_count: usize,
    pub leaderboard: Vec<LeaderboardRow>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeaderboardRow {
    pub player: PlayerWithAggregates,
    pub red_flags: usize,
}

/// A stored composite that disagrees with the recomputed formula.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CompositeMismatch {
    pub score_id: i64,
    pub player_id: i64,
    pub stored: f64,
    pub expected: f64,
}

impl CompositeMismatch {
    pub fn difference(&self) -> f64 {
        (self.stored - self.expected).abs()
    }
}
