//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::store::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::utils::{AppError, AppResult};

const NOT_FOUND_MESSAGE: &str = "Menu item not found";

/// Parse a path id. Non-numeric ids can never match an item, so they are
/// reported as not-found rather than as a malformed request.
fn parse_id(raw: &str) -> Result<u64, AppError> {
    raw.parse()
        .map_err(|_| AppError::not_found(NOT_FOUND_MESSAGE))
}

/// GET /api/menu - list all menu items
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let menu = state.menu.read().await;
    Ok(Json(menu.list().to_vec()))
}

/// GET /api/menu/:id - fetch a single menu item
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let id = parse_id(&id)?;
    let menu = state.menu.read().await;
    let item = menu
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;
    Ok(Json(item))
}

/// POST /api/menu - create a menu item
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    let new = payload.validated().map_err(AppError::validation)?;

    let mut menu = state.menu.write().await;
    let item = menu.create(new);

    tracing::info!(id = item.id, name = %item.name, "Menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/menu/:id - partially update a menu item
///
/// An unknown id is reported before the body is validated, so the client
/// sees 404 for a missing item no matter what they sent.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    let id = parse_id(&id)?;

    let mut menu = state.menu.write().await;
    if !menu.contains(id) {
        return Err(AppError::not_found(NOT_FOUND_MESSAGE));
    }

    let patch = payload.validated().map_err(AppError::validation)?;
    let item = menu
        .update(id, patch)
        .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

    tracing::info!(id = item.id, "Menu item updated");
    Ok(Json(item))
}

/// DELETE /api/menu/:id - delete a menu item
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let id = parse_id(&id)?;

    let mut menu = state.menu.write().await;
    let item = menu
        .delete(id)
        .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

    tracing::info!(id = item.id, name = %item.name, "Menu item deleted");
    Ok(Json(item))
}
