//! Adapters: concrete implementations at the edges of the system.
//!
//! - `session` - persistent and in-memory session stores
//! - `backend` - the API client for the backend REST API
//! - `http` - the frontend gateway's own HTTP surface (health)

pub mod backend;
pub mod http;
pub mod session;
