//! Ecosistema Union - Membership Platform Client Layer
//!
//! This crate implements the client side of the Ecosistema Union
//! business-networking platform: a typed API client for the backend REST
//! API, a persistent session store, a reusable route guard, and the
//! frontend's own health gateway.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
