pub mod auth_store;
pub mod session_store;

pub use auth_store::AuthStore;
pub use session_store::{LocalStorageSessionStore, MemorySessionStore, SessionStore};
