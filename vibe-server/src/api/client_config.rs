//! Runtime configuration delivery
//!
//! `GET /config.js` hands the browser client its two runtime values:
//! the externally reachable base URL (if any) and the API base path.
//! Configuration delivery only — not part of the REST surface.

use axum::Router;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/config.js", get(config_js))
}

pub async fn config_js(State(state): State<ServerState>) -> impl IntoResponse {
    let live_url = js_string(&state.config.live_url);
    let api_base = js_string(&state.config.api_base);
    let body = format!("window.LIVE_URL={live_url};window.API_BASE={api_base};");
    ([(header::CONTENT_TYPE, "application/javascript")], body)
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".into())
}
