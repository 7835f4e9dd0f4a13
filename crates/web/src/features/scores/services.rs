use storage::{dto::score::RecentScoreEntry, models::DataSnapshot, services::metrics};

/// Newest scores, each joined with its play when the play is loaded
pub fn recent_scores(snapshot: &DataSnapshot, limit: usize) -> Vec<RecentScoreEntry> {
    metrics::recent_scores(&snapshot.scores, limit)
        .into_iter()
        .map(|score| {
            let play = snapshot.play(score.play_id).cloned();
            RecentScoreEntry { score, play }
        })
        .collect()
}
