// ============================================================================
// SESSION STORE - Where the logged-in session is persisted
// ============================================================================
// Injected into `use_auth` instead of touching localStorage from everywhere,
// so tests can swap in the in-memory store.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::AppError;
use crate::models::Session;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_SESSION};

pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn persist(&self, session: &Session) -> Result<(), AppError>;
    fn clear(&self);
}

/// Browser localStorage, one JSON record under [`STORAGE_KEY_SESSION`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocalStorageSessionStore;

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Option<Session> {
        load_from_storage::<Session>(STORAGE_KEY_SESSION)
    }

    fn persist(&self, session: &Session) -> Result<(), AppError> {
        save_to_storage(STORAGE_KEY_SESSION, session)
    }

    fn clear(&self) {
        remove_from_storage(STORAGE_KEY_SESSION);
    }
}

/// Keeps the session in memory only. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Rc<RefCell<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(session))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.slot.borrow().clone()
    }

    fn persist(&self, session: &Session) -> Result<(), AppError> {
        *self.slot.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LoginResponse, User};

    fn session() -> Session {
        Session::from_login(LoginResponse {
            token: "tok-123".into(),
            user: User {
                id: "u1".into(),
                name: "Admin".into(),
                email: "admin@example.org".into(),
                role: Some("admin".into()),
            },
        })
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert!(store.load().is_none());

        let session = session();
        store.persist(&session).unwrap();
        assert_eq!(store.load(), Some(session));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn memory_store_clones_share_slot() {
        let store = MemorySessionStore::with_session(session());
        let other = store.clone();
        other.clear();
        assert!(store.load().is_none());
    }
}
