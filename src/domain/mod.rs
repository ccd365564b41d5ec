//! Domain layer: the wire-level entities the client consumes and the pure
//! role-/status-conditional view logic built on top of them.
//!
//! # Module Organization
//!
//! - `user` / `session` - authenticated identity and the persisted session
//! - `member`, `payment`, `meeting`, `collective`, `visit`, `video`,
//!   `quiz`, `notification`, `profile` - backend payload types with their
//!   status enums and permitted-action predicates
//! - `journey` - the visitor dashboard's onboarding view model
//!
//! No state transitions happen here; every transition is performed by the
//! backend and the client only reflects the current value.

pub mod collective;
pub mod journey;
pub mod meeting;
pub mod member;
pub mod notification;
pub mod payment;
pub mod profile;
pub mod quiz;
pub mod session;
pub mod user;
pub mod video;
pub mod visit;

pub use session::Session;
pub use user::{ReferrerInfo, Role, UserSnapshot, UserStatus};
