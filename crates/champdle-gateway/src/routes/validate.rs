//! Guess validation endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use champdle_core::{Guess, ValidationSummary};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ValidateRejection;
use crate::json::ValidateRequest;
use crate::AppState;

/// Validation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/validate", post(validate))
}

/// Check a champion against a row and a column guess.
///
/// A failed guess is still a 200 with `valid: false`; 400 is reserved for
/// malformed requests and unknown champions.
async fn validate(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidationSummary>, ValidateRejection> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "malformed validate request");
        ValidateRejection::bad_request(format!("Malformed request: {}", rejection.body_text()))
    })?;

    let missing = request.missing_fields();
    if !missing.is_empty() {
        warn!(?missing, "validate request missing fields");
        return Err(ValidateRejection::bad_request(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let (Some(name), Some(row_kind), Some(col_kind)) =
        (request.champion(), request.row_kind(), request.col_kind())
    else {
        return Err(ValidateRejection::bad_request("Missing required fields"));
    };

    let row = guess(row_kind, request.expected_value_row.as_ref(), "expected_value_row")?;
    let col = guess(col_kind, request.expected_value_col.as_ref(), "expected_value_col")?;

    let result = state
        .validator
        .validate_named(&state.catalog, name, &row, &col)
        .map_err(|err| {
            if err.is_not_found() {
                warn!(champion = %name, "champion not found");
            }
            ValidateRejection::from(err)
        })?;

    debug!(champion = %name, valid = result.is_valid(), "validated guess");
    Ok(Json(result.summary()))
}

fn guess(kind: &str, expected: Option<&Value>, field: &str) -> Result<Guess, ValidateRejection> {
    match expected {
        None => Ok(Guess::missing(kind)),
        Some(value) => Guess::from_json(kind, value).map_err(|err| {
            ValidateRejection::bad_request(format!(
                "Invalid {}: expected a string or number, got {}",
                field, err.0
            ))
        }),
    }
}
