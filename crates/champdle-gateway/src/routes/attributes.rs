//! Attribute kinds and known tag values.

use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use champdle_core::{AttributeKind, TagKind};

use crate::json::AttributesResponse;
use crate::AppState;

/// Attribute routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/attributes", get(list_attributes))
}

/// Everything a client needs to build guess grids.
async fn list_attributes(State(state): State<AppState>) -> Json<AttributesResponse> {
    let tags: BTreeMap<&'static str, Vec<String>> = TagKind::ALL
        .into_iter()
        .map(|kind| (kind.as_str(), state.catalog.tag_values(kind)))
        .collect();

    Json(AttributesResponse {
        kinds: AttributeKind::ALL.iter().map(|k| k.as_str()).collect(),
        wildcard_region: state.validator.wildcard_region().map(String::from),
        tags,
    })
}
