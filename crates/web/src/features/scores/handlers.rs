use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::dto::score::{RecentScoreEntry, RecentScoresQuery};

use crate::{error::WebError, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/scores/recent",
    params(RecentScoresQuery),
    responses(
        (status = 200, description = "Most recent scores, newest first", body = Vec<RecentScoreEntry>),
        (status = 503, description = "Scouting data unavailable")
    ),
    tag = "scores"
)]
pub async fn list_recent_scores(
    State(state): State<AppState>,
    Query(query): Query<RecentScoresQuery>,
) -> Result<Response, WebError> {
    let snapshot = state.snapshot().await?;
    let limit = query.effective_limit(state.recent_limit());

    Ok(Json(services::recent_scores(&snapshot, limit)).into_response())
}
