//! HTTP routes for the health endpoint.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_health, HealthAppState};

/// Creates the health router.
pub fn health_routes(state: HealthAppState) -> Router {
    Router::new()
        // GET /api/health
        .route("/api/health", get(get_health))
        .with_state(state)
}
