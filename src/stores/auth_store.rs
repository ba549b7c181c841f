// ============================================================================
// AUTH STORE - Session state shared through `AuthContext`
// ============================================================================

use crate::error::ApiError;
use crate::models::{LoginRequest, Session, User};
use crate::services::{ApiClient, AuthApi};
use crate::stores::SessionStore;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthStore {
    pub session: Option<Session>,
    pub logging_in: bool,
    pub error: Option<String>,
}

impl AuthStore {
    /// State at startup: whatever session `store` still holds.
    pub fn restore(store: &dyn SessionStore) -> Self {
        let session = store.load();
        if let Some(session) = &session {
            log::info!("✅ Session restored: {}", session.user.email);
        }
        Self { session, ..Self::default() }
    }

    pub fn signed_in(session: Session) -> Self {
        Self { session: Some(session), ..Self::default() }
    }

    pub fn failed(error: &ApiError) -> Self {
        Self {
            error: Some(login_error_message(error)),
            ..Self::default()
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// API client carrying the session token, if any.
    pub fn client(&self) -> ApiClient {
        match &self.session {
            Some(session) => ApiClient::new().with_token(&session.token),
            None => ApiClient::new(),
        }
    }
}

/// Logs in and persists the resulting session. A session that cannot be
/// persisted is still returned; it just will not survive a reload.
pub async fn sign_in<A: AuthApi + ?Sized>(
    api: &A,
    store: &dyn SessionStore,
    request: LoginRequest,
) -> Result<Session, ApiError> {
    let response = api.login(request).await?;
    let session = Session::from_login(response);
    if let Err(e) = store.persist(&session) {
        log::warn!("⚠️ Could not persist session: {}", e);
    }
    log::info!("✅ Login OK: {}", session.user.email);
    Ok(session)
}

pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized => "Invalid email or password".to_string(),
        ApiError::Network(_) => "Cannot reach the server. Check your connection.".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginResponse;
    use crate::stores::MemorySessionStore;
    use async_trait::async_trait;
    use futures::executor::block_on;

    struct FakeAuth(Result<LoginResponse, ApiError>);

    #[async_trait(?Send)]
    impl AuthApi for FakeAuth {
        async fn login(&self, _request: LoginRequest) -> Result<LoginResponse, ApiError> {
            self.0.clone()
        }
    }

    fn response() -> LoginResponse {
        LoginResponse {
            token: "t0k3n".into(),
            user: User {
                id: "u1".into(),
                name: "Admin".into(),
                email: "admin@example.org".into(),
                role: None,
            },
        }
    }

    #[test]
    fn sign_in_persists_session() {
        let store = MemorySessionStore::new();
        let session = block_on(sign_in(&FakeAuth(Ok(response())), &store, LoginRequest::default())).unwrap();

        assert_eq!(session.token, "t0k3n");
        let restored = AuthStore::restore(&store);
        assert!(restored.is_logged_in());
        assert_eq!(restored.user().map(|u| u.email.as_str()), Some("admin@example.org"));
    }

    #[test]
    fn rejected_credentials_leave_store_empty() {
        let store = MemorySessionStore::new();
        let result = block_on(sign_in(&FakeAuth(Err(ApiError::Unauthorized)), &store, LoginRequest::default()));

        let state = AuthStore::failed(&result.unwrap_err());
        assert_eq!(state.error.as_deref(), Some("Invalid email or password"));
        assert!(!AuthStore::restore(&store).is_logged_in());
    }
}
