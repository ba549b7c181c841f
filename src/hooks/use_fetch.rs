use std::future::Future;

use yew::prelude::*;

use crate::error::ApiError;
use crate::state::FetchState;

pub struct UseFetchHandle<T: 'static> {
    pub state: UseStateHandle<FetchState<T>>,
    pub refetch: Callback<()>,
}

impl<T: 'static> UseFetchHandle<T> {
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}

/// Runs `fetcher(deps)` on mount, whenever `deps` changes and on every
/// `refetch`. A response that settles late still lands in `state`.
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetcher: F) -> UseFetchHandle<T>
where
    T: 'static,
    D: Clone + PartialEq + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(FetchState::<T>::default);
    let generation = use_state(|| 0u32);

    {
        let state = state.clone();
        use_effect_with((deps, *generation), move |(deps, _)| {
            state.set(FetchState::Loading);
            let deps = deps.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetcher(deps).await {
                    Ok(data) => state.set(FetchState::Success(data)),
                    Err(e) => {
                        log::error!("❌ Failed to load data: {}", e);
                        state.set(FetchState::Error(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let refetch = {
        let generation = generation.clone();
        Callback::from(move |_| generation.set(generation.wrapping_add(1)))
    };

    UseFetchHandle { state, refetch }
}
