use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::handlers::{
    add_player, clear_cart, create_cart, delete_cart, export_cart, get_cart, get_stats,
    remove_player, rename_cart, save_session, set_visibility, update_notes,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cart))
        .route("/:id", get(get_cart).delete(delete_cart))
        .route("/:id/players", post(add_player))
        .route("/:id/players/:player_id", delete(remove_player))
        .route("/:id/players/:player_id/notes", put(update_notes))
        .route("/:id/name", put(rename_cart))
        .route("/:id/visibility", put(set_visibility))
        .route("/:id/clear", post(clear_cart))
        .route("/:id/stats", get(get_stats))
        .route("/:id/export", get(export_cart))
        .route("/:id/sessions", post(save_session))
}
