//! Champion name search.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::json::SearchParams;
use crate::AppState;

/// Search routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/search", get(search))
}

/// Names matching the query, in catalog order. A missing or blank query
/// yields an empty list.
async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<String>>, AppError> {
    let Query(params) = params.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "malformed search request");
        AppError::BadRequest(rejection.body_text())
    })?;

    let query = params.query.unwrap_or_default();
    let mode = params.mode.unwrap_or(state.config.search_mode);
    let limit = params
        .limit
        .map_or(state.config.search_limit, |n| n.min(state.config.search_limit));

    let names = state.catalog.search_limited(&query, mode, limit);
    debug!(query = %query, %mode, limit, results = names.len(), "search");
    Ok(Json(names))
}
