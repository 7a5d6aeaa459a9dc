//! Champdle HTTP/JSON Gateway.
//!
//! Serves champion search, attribute lookup and guess validation for the
//! game's front end.

pub mod config;
pub mod error;
pub mod json;
pub mod routes;

pub use config::{Args, GatewayConfig};
pub use error::{AppError, ValidateRejection};

use std::sync::Arc;

use axum::Router;
use champdle_core::{Catalog, Validator};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Champion catalog.
    pub catalog: Arc<Catalog>,
    /// Guess validator.
    pub validator: Arc<Validator>,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new application state.
    pub fn new(catalog: Catalog, config: GatewayConfig) -> Self {
        let validator = Validator::new(config.validator_config());
        Self {
            catalog: Arc::new(catalog),
            validator: Arc::new(validator),
            config,
        }
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::search::routes())
        .merge(routes::champion::routes())
        .merge(routes::validate::routes())
        .merge(routes::attributes::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
