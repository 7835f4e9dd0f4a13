use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::summary::SessionSummary;

use crate::{error::WebError, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/summary",
    responses(
        (status = 200, description = "Session totals and leaderboard", body = SessionSummary),
        (status = 503, description = "Scouting data unavailable")
    ),
    tag = "summary"
)]
pub async fn get_summary(State(state): State<AppState>) -> Result<Response, WebError> {
    let snapshot = state.snapshot().await?;

    Ok(Json(services::summarize(&snapshot)).into_response())
}
