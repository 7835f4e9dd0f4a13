pub mod carts;
pub mod players;
pub mod refresh;
pub mod scores;
pub mod sessions;
pub mod summary;

use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/players", players::routes::routes())
        .nest("/api/scores", scores::routes::routes())
        .nest("/api/summary", summary::routes::routes())
        .nest("/api/refresh", refresh::routes::routes())
        .nest("/api/carts", carts::routes::routes())
        .nest("/api/sessions", sessions::routes::routes())
        .with_state(state)
}
