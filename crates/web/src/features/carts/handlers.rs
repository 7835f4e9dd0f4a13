use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use storage::{
    cart::CartStats,
    dto::cart::{
        AddToCartRequest, CartMutationResponse, CartView, CreateCartResponse, RenameCartRequest,
        SaveSessionResponse, UpdateNotesRequest, VisibilityRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::WebError, state::AppState};

use super::services;

#[utoipa::path(
    post,
    path = "/api/carts",
    responses(
        (status = 201, description = "Empty cart created", body = CreateCartResponse)
    ),
    tag = "carts"
)]
pub async fn create_cart(State(state): State<AppState>) -> Result<Response, WebError> {
    let cart_id = state.create_cart().await;

    Ok((StatusCode::CREATED, Json(CreateCartResponse { cart_id })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/carts/{id}",
    params(
        ("id" = Uuid, Path, description = "Cart id")
    ),
    responses(
        (status = 200, description = "Cart contents", body = CartView),
        (status = 404, description = "Cart not found")
    ),
    tag = "carts"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let cart = state.cart(id).await?;

    Ok(Json(services::view(&cart).await).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/carts/{id}",
    params(
        ("id" = Uuid, Path, description = "Cart id")
    ),
    responses(
        (status = 204, description = "Cart discarded"),
        (status = 404, description = "Cart not found")
    ),
    tag = "carts"
)]
pub async fn delete_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    state.remove_cart(id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/carts/{id}/players",
    params(
        ("id" = Uuid, Path, description = "Cart id")
    ),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Player added, or already present when `changed` is false", body = CartMutationResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Cart or player not found")
    ),
    tag = "carts"
)]
pub async fn add_player(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddToCartRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let cart = state.cart(id).await?;
    let snapshot = state.snapshot().await?;
    let response = services::add_player(&cart, &snapshot, req).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/carts/{id}/players/{player_id}",
    params(
        ("id" = Uuid, Path, description = "Cart id"),
        ("player_id" = i64, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "Player removed, or absent when `changed` is false", body = CartMutationResponse),
        (status = 404, description = "Cart not found")
    ),
    tag = "carts"
)]
pub async fn remove_player(
    State(state): State<AppState>,
    Path((id, player_id)): Path<(Uuid, i64)>,
) -> Result<Response, WebError> {
    let cart = state.cart(id).await?;

    Ok(Json(services::remove_player(&cart, player_id).await).into_response())
}

#[utoipa::path(
    put,
    path = "/api/carts/{id}/players/{player_id}/notes",
    params(
        ("id" = Uuid, Path, description = "Cart id"),
        ("player_id" = i64, Path, description = "Player id")
    ),
    request_body = UpdateNotesRequest,
    responses(
        (status = 200, description = "Notes replaced when the player is in the cart", body = CartMutationResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Cart not found")
    ),
    tag = "carts"
)]
pub async fn update_notes(
    State(state): State<AppState>,
    Path((id, player_id)): Path<(Uuid, i64)>,
    Json(req): Json<UpdateNotesRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let cart = state.cart(id).await?;

    Ok(Json(services::update_notes(&cart, player_id, req.notes).await).into_response())
}

#[utoipa::path(
    put,
    path = "/api/carts/{id}/name",
    params(
        ("id" = Uuid, Path, description = "Cart id")
    ),
    request_body = RenameCartRequest,
    responses(
        (status = 200, description = "Cart renamed", body = CartView),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Cart not found")
    ),
    tag = "carts"
)]
pub async fn rename_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RenameCartRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let cart = state.cart(id).await?;

    Ok(Json(services::rename(&cart, req.name).await).into_response())
}

#[utoipa::path(
    put,
    path = "/api/carts/{id}/visibility",
    params(
        ("id" = Uuid, Path, description = "Cart id")
    ),
    request_body = VisibilityRequest,
    responses(
        (status = 200, description = "Visibility flag updated", body = CartView),
        (status = 404, description = "Cart not found")
    ),
    tag = "carts"
)]
pub async fn set_visibility(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<VisibilityRequest>,
) -> Result<Response, WebError> {
    let cart = state.cart(id).await?;

    Ok(Json(services::set_visibility(&cart, req.open).await).into_response())
}

#[utoipa::path(
    post,
    path = "/api/carts/{id}/clear",
    params(
        ("id" = Uuid, Path, description = "Cart id")
    ),
    responses(
        (status = 200, description = "Cart emptied and renamed to the default", body = CartView),
        (status = 404, description = "Cart not found")
    ),
    tag = "carts"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let cart = state.cart(id).await?;

    Ok(Json(services::clear(&cart).await).into_response())
}

#[utoipa::path(
    get,
    path = "/api/carts/{id}/stats",
    params(
        ("id" = Uuid, Path, description = "Cart id")
    ),
    responses(
        (status = 200, description = "Counts and averages over the cart", body = CartStats),
        (status = 404, description = "Cart not found")
    ),
    tag = "carts"
)]
pub async fn get_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let cart = state.cart(id).await?;

    Ok(Json(services::stats(&cart).await).into_response())
}

#[utoipa::path(
    get,
    path = "/api/carts/{id}/export",
    params(
        ("id" = Uuid, Path, description = "Cart id")
    ),
    responses(
        (status = 200, description = "Comma-separated export of the cart", content_type = "text/csv", body = String),
        (status = 404, description = "Cart not found"),
        (status = 500, description = "Export could not be written")
    ),
    tag = "carts"
)]
pub async fn export_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let cart = state.cart(id).await?;
    let (body, filename) = services::export(&cart).await?;
    let disposition = format!("attachment; filename=\"{}\"", filename.replace('"', ""));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/api/carts/{id}/sessions",
    params(
        ("id" = Uuid, Path, description = "Cart id")
    ),
    responses(
        (status = 201, description = "Cart contents saved as a session", body = SaveSessionResponse),
        (status = 404, description = "Cart not found"),
        (status = 500, description = "Session store failed")
    ),
    tag = "carts"
)]
pub async fn save_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let cart = state.cart(id).await?;
    let session_id = services::save_session(&cart, state.session_store()).await?;

    Ok((StatusCode::CREATED, Json(SaveSessionResponse { session_id })).into_response())
}
