//! Router assembly: health, probe, list, create.

use crate::handlers::health::{db_probe, health};
use crate::handlers::users::{create, list};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

/// The form client may be served from another origin, so CORS stays open.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/db", get(db_probe))
        .route("/api/all", get(list))
        .route("/api/form", post(create))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
