//! Order API Handlers
//!
//! The list endpoint returns raw order fields plus items; the detail
//! endpoint additionally carries totals derived from current menu prices.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::{menu, order};
use crate::pricing::{self, OrderTotals};
use crate::utils::{AppError, AppResult};
use shared::models::{Order, OrderCreate, OrderUpdate};
use shared::util::{now_millis, uid};

/// Order with its derived totals, recomputed on every read
#[derive(Debug, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    #[serde(flatten)]
    pub totals: OrderTotals,
}

/// GET /api/orders - List orders, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = order::find_all(&state.pool).await?;
    Ok(Json(orders))
}

/// GET /api/orders/{id} - Fetch one order with derived totals
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderDetail>> {
    let order = order::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;

    let prices = menu::price_map(&state.pool).await?;
    let totals = pricing::order_totals(&order.items, &prices, order.tax_rate);

    Ok(Json(OrderDetail { order, totals }))
}

/// POST /api/orders - Create an order with its line items
///
/// `table`, `status` and a non-empty `items` list must be present.
/// `createdAt` is stamped server-side and never accepted from the caller.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let (Some(table_number), Some(status)) = (payload.table_number, payload.status) else {
        return Err(AppError::bad_request("Missing fields"));
    };
    if payload.items.is_empty() {
        return Err(AppError::bad_request("Missing fields"));
    }

    let order = Order {
        id: payload.id.unwrap_or_else(|| uid("o")),
        table_number,
        reservation_id: payload.reservation_id.unwrap_or_default(),
        status,
        tax_rate: payload.tax_rate.unwrap_or(0.0),
        created_at: now_millis(),
        items: payload.items,
    };

    tracing::info!(
        id = %order.id,
        table = order.table_number,
        items = order.items.len(),
        "Creating order"
    );

    let created = order::create(&state.pool, order).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/orders/{id} - Update an order
///
/// The line item set is replaced wholesale with the payload's list.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<Order>> {
    tracing::info!(id = %id, items = payload.items.len(), "Updating order");

    let order = order::update(&state.pool, &id, payload).await?;
    Ok(Json(order))
}

/// DELETE /api/orders/{id} - Delete an order and its line items
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    tracing::info!(id = %id, "Deleting order");

    order::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
