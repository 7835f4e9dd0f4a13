use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::snapshot::SnapshotInfo;

use crate::{error::WebError, state::AppState};

#[utoipa::path(
    post,
    path = "/api/refresh",
    responses(
        (status = 200, description = "Snapshot reloaded", body = SnapshotInfo),
        (status = 502, description = "Data source failed; cached data cleared")
    ),
    tag = "refresh"
)]
pub async fn refresh_snapshot(State(state): State<AppState>) -> Result<Response, WebError> {
    let snapshot = state.refresh().await?;

    Ok(Json(SnapshotInfo::from(snapshot.as_ref())).into_response())
}
