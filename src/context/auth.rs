use yew::prelude::*;

use crate::services::ApiClient;
use crate::stores::AuthStore;

/// Current session plus the logout action, provided by `App`.
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub auth: AuthStore,
    pub logout: Callback<()>,
}

/// Client for the logged-in user; unauthenticated outside an `AuthContext`.
#[hook]
pub fn use_api_client() -> ApiClient {
    use_context::<AuthContext>()
        .map(|context| context.auth.client())
        .unwrap_or_default()
}
