use crate::error::ScoutError;
use crate::models::DataSnapshot;
use crate::traits::DataSource;

/// Fetches a fresh snapshot. Failures are surfaced as [`ScoutError::Fetch`]
/// and never retried here.
pub async fn load_snapshot(source: &dyn DataSource) -> Result<DataSnapshot, ScoutError> {
    match source.fetch_snapshot().await {
        Ok(snapshot) => {
            tracing::info!(
                players = snapshot.players.len(),
                plays = snapshot.plays.len(),
                scores = snapshot.scores.len(),
                "Loaded scouting snapshot"
            );
            Ok(snapshot)
        }
        Err(e) => {
            tracing::error!("Failed to load scouting snapshot: {}", e);
            Err(ScoutError::Fetch(e))
        }
    }
}
