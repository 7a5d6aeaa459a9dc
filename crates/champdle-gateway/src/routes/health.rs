//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};

use crate::json::HealthResponse;
use crate::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let champions = state.catalog.len();

    Json(HealthResponse {
        status: if champions > 0 { "healthy" } else { "empty" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        champions,
    })
}
