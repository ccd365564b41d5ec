//! Ports: interfaces between the application core and the outside world.

mod session_store;

pub use session_store::{SessionStore, SessionStoreError};
