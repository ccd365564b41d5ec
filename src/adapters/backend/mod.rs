//! Backend API adapter: the typed client for the Ecosistema Union REST
//! API and its error normalization.

mod client;
mod error;

pub use client::UnionApi;
pub use error::ApiError;
