//! Health check route
//!
//! `GET /api/health` reports reachability plus the menu row count as a
//! smoke-test signal.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::menu;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    ok: bool,
    /// Menu row count
    menu: i64,
}

pub async fn health(State(state): State<ServerState>) -> AppResult<Json<HealthResponse>> {
    let menu = menu::count(&state.pool).await?;
    Ok(Json(HealthResponse { ok: true, menu }))
}
