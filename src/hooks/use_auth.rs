use std::rc::Rc;

use yew::prelude::*;

use crate::models::LoginRequest;
use crate::services::ApiClient;
use crate::stores::auth_store::sign_in;
use crate::stores::{AuthStore, SessionStore};

pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthStore>,
    pub login: Callback<LoginRequest>,
    pub logout: Callback<()>,
}

/// Session lifecycle on top of an injected `SessionStore`: restored on
/// mount, persisted on login, cleared on logout.
#[hook]
pub fn use_auth(store: Rc<dyn SessionStore>) -> UseAuthHandle {
    let state = {
        let store = Rc::clone(&store);
        use_state(move || AuthStore::restore(store.as_ref()))
    };

    let login = {
        let state = state.clone();
        let store = Rc::clone(&store);
        Callback::from(move |request: LoginRequest| {
            if state.logging_in {
                return;
            }
            state.set(AuthStore { logging_in: true, ..AuthStore::default() });

            let state = state.clone();
            let store = Rc::clone(&store);
            wasm_bindgen_futures::spawn_local(async move {
                match sign_in(&ApiClient::new(), store.as_ref(), request).await {
                    Ok(session) => state.set(AuthStore::signed_in(session)),
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        state.set(AuthStore::failed(&e));
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            store.clear();
            log::info!("👋 Logout");
            state.set(AuthStore::default());
        })
    };

    UseAuthHandle { state, login, logout }
}
