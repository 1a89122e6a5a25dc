//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`menu`] - menu item CRUD
//! - [`reservations`] - reservation CRUD
//! - [`orders`] - order CRUD with derived totals on detail reads
//! - [`client_config`] - runtime configuration delivery for the browser

pub mod client_config;
pub mod health;
pub mod menu;
pub mod orders;
pub mod reservations;

use axum::Router;

use crate::core::ServerState;

/// Assemble all API routes
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(menu::router())
        .merge(reservations::router())
        .merge(orders::router())
        .merge(client_config::router())
}
