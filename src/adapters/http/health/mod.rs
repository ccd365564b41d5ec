//! Health HTTP adapter module.
//!
//! Exposes the frontend gateway's `GET /api/health` endpoint, which
//! combines the gateway's own liveness with the backend's health payload.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::HealthResponse;
pub use handlers::HealthAppState;
pub use routes::health_routes;
