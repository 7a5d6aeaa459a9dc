//! Champion attribute lookup.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use champdle_core::ChampionSnapshot;

use crate::error::AppError;
use crate::json::ChampionParams;
use crate::AppState;

/// Champion routes. `/getChampData` is kept for older front ends.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/champion", get(get_champion))
        .route("/getChampData", get(get_champion))
}

async fn get_champion(
    State(state): State<AppState>,
    Query(params): Query<ChampionParams>,
) -> Result<Json<ChampionSnapshot>, AppError> {
    let name = params
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing required parameter: name".to_string()))?;

    let snapshot = state.catalog.attributes(name)?;
    Ok(Json(snapshot))
}
