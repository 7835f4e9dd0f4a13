use axum::{Router, routing::get};

use super::handlers::{compare_players, get_player, get_top_player, list_players};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_players))
        .route("/top", get(get_top_player))
        .route("/compare", get(compare_players))
        .route("/:id", get(get_player))
}
