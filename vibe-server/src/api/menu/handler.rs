//! Menu API Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::core::ServerState;
use crate::db::repository::menu;
use crate::utils::{AppError, AppResult};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::util::uid;

/// GET /api/menu - List menu items, sorted by category then name
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu::find_all(&state.pool).await?;
    Ok(Json(items))
}

/// GET /api/menu/{id} - Fetch one menu item
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let item = menu::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {id} not found")))?;
    Ok(Json(item))
}

/// POST /api/menu - Create a menu item
///
/// `name`, `category` and `price` must be present; a missing one fails
/// before any storage mutation. The caller may supply an id, otherwise a
/// short `m-` prefixed one is generated.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    let (Some(name), Some(category), Some(price)) =
        (payload.name, payload.category, payload.price)
    else {
        return Err(AppError::bad_request("Missing fields"));
    };

    let item = MenuItem {
        id: payload.id.unwrap_or_else(|| uid("m")),
        name,
        category,
        price,
        prep_time: payload.prep_time.unwrap_or(10),
        available: payload.available.unwrap_or(true),
    };

    tracing::info!(id = %item.id, name = %item.name, "Creating menu item");

    let created = menu::create(&state.pool, item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/menu/{id} - Update a menu item
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    tracing::info!(id = %id, "Updating menu item");

    let item = menu::update(&state.pool, &id, payload).await?;
    Ok(Json(item))
}

/// DELETE /api/menu/{id} - Delete a menu item
///
/// Cascades to every order line item referencing it.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    tracing::info!(id = %id, "Deleting menu item");

    menu::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
