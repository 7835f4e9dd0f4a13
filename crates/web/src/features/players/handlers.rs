use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::dto::{
    common::{PaginatedResponse, PaginationParams},
    player::{
        ComparisonQuery, PlayerComparison, PlayerFilter, PlayerProfile, PlayerWithAggregates,
    },
};

use crate::{error::WebError, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/players",
    params(PlayerFilter, PaginationParams),
    responses(
        (status = 200, description = "Ranked players matching the filter", body = PaginatedResponse<PlayerWithAggregates>),
        (status = 400, description = "Invalid query parameters"),
        (status = 503, description = "Scouting data unavailable")
    ),
    tag = "players"
)]
pub async fn list_players(
    State(state): State<AppState>,
    Query(filter): Query<PlayerFilter>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;
    pagination.validate().map_err(WebError::BadRequest)?;

    let snapshot = state.snapshot().await?;
    let players = services::list_players(&snapshot, &filter);

    Ok(Json(PaginatedResponse::from_items(players, &pagination)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/top",
    responses(
        (status = 200, description = "Highest ranked player", body = PlayerWithAggregates),
        (status = 404, description = "No players loaded")
    ),
    tag = "players"
)]
pub async fn get_top_player(State(state): State<AppState>) -> Result<Response, WebError> {
    let snapshot = state.snapshot().await?;
    let top = services::top_player(&snapshot).ok_or(WebError::NotFound)?;

    Ok(Json(top).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/compare",
    params(ComparisonQuery),
    responses(
        (status = 200, description = "Side-by-side comparison", body = PlayerComparison),
        (status = 404, description = "One of the players was not found")
    ),
    tag = "players"
)]
pub async fn compare_players(
    State(state): State<AppState>,
    Query(query): Query<ComparisonQuery>,
) -> Result<Response, WebError> {
    let snapshot = state.snapshot().await?;
    let comparison =
        services::compare_players(&snapshot, query.left, query.right).ok_or(WebError::NotFound)?;

    Ok(Json(comparison).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/{id}",
    params(
        ("id" = i64, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "Player with rank and recent scores", body = PlayerProfile),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let snapshot = state.snapshot().await?;
    let profile =
        services::player_profile(&snapshot, id, state.recent_limit()).ok_or(WebError::NotFound)?;

    Ok(Json(profile).into_response())
}
