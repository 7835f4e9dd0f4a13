use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::models::CartSession;

use crate::{error::WebError, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/sessions",
    responses(
        (status = 200, description = "Saved cart sessions in save order", body = Vec<CartSession>)
    ),
    tag = "sessions"
)]
pub async fn list_sessions(State(state): State<AppState>) -> Result<Response, WebError> {
    let sessions = services::list_sessions(state.session_store()).await?;

    Ok(Json(sessions).into_response())
}
