use axum::{Router, routing::post};

use super::handlers::refresh_snapshot;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(refresh_snapshot))
}
