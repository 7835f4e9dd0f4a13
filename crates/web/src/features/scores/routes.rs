use axum::{Router, routing::get};

use super::handlers::list_recent_scores;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/recent", get(list_recent_scores))
}
