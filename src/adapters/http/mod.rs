//! HTTP adapter: the gateway's own HTTP surface.

pub mod health;
