//! Session store adapters.

mod file;
mod in_memory;

pub use file::FileSessionStore;
pub use in_memory::InMemorySessionStore;
