use storage::{
    dto::player::{PlayerComparison, PlayerFilter, PlayerProfile, PlayerWithAggregates},
    models::DataSnapshot,
    services::{browse, metrics},
};

/// Ranked, filtered and sorted players
pub fn list_players(snapshot: &DataSnapshot, filter: &PlayerFilter) -> Vec<PlayerWithAggregates> {
    let ranked = metrics::rank_players(&snapshot.players, &snapshot.scores);
    browse::filter_players(ranked, filter)
}

pub fn top_player(snapshot: &DataSnapshot) -> Option<PlayerWithAggregates> {
    metrics::top_player(&snapshot.players, &snapshot.scores)
}

pub fn compare_players(
    snapshot: &DataSnapshot,
    left_id: i64,
    right_id: i64,
) -> Option<PlayerComparison> {
    let ranked = metrics::rank_players(&snapshot.players, &snapshot.scores);
    browse::compare_players(&ranked, left_id, right_id)
}

pub fn player_profile(
    snapshot: &DataSnapshot,
    player_id: i64,
    recent_limit: usize,
) -> Option<PlayerProfile> {
    browse::player_profile(&snapshot.players, &snapshot.scores, player_id, recent_limit)
}
