use std::rc::Rc;

use yew::prelude::*;

use crate::state::{SearchAction, SearchFilterState, Searchable};

impl<T: Searchable + 'static> Reducible for SearchFilterState<T> {
    type Action = SearchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

pub struct UseSearchAndFilterHandle<T: Searchable + 'static> {
    pub state: UseReducerHandle<SearchFilterState<T>>,
    pub set_search_term: Callback<String>,
    pub set_main_filter: Callback<String>,
    pub set_custom_filter: Callback<(String, String)>,
    pub set_current_page: Callback<usize>,
    pub reset_search: Callback<()>,
}

/// Search / filter / pagination over `data`. The engine is built once by
/// `init`; later changes to `data` (a refetch) are pushed into it.
#[hook]
pub fn use_search_and_filter<T, I>(data: Vec<T>, init: I) -> UseSearchAndFilterHandle<T>
where
    T: Searchable + Clone + PartialEq + 'static,
    I: FnOnce(Vec<T>) -> SearchFilterState<T>,
{
    let state = {
        let data = data.clone();
        use_reducer(move || init(data))
    };

    {
        let state = state.clone();
        use_effect_with(data, move |data| {
            if state.data() != data.as_slice() {
                state.dispatch(SearchAction::SetData(data.clone()));
            }
            || ()
        });
    }

    let set_search_term = {
        let state = state.clone();
        Callback::from(move |term: String| state.dispatch(SearchAction::SetSearchTerm(term)))
    };

    let set_main_filter = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(SearchAction::SetMainFilter(value)))
    };

    let set_custom_filter = {
        let state = state.clone();
        Callback::from(move |(key, value): (String, String)| {
            state.dispatch(SearchAction::SetCustomFilter(key, value));
        })
    };

    let set_current_page = {
        let state = state.clone();
        Callback::from(move |page: usize| state.dispatch(SearchAction::SetCurrentPage(page)))
    };

    let reset_search = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(SearchAction::Reset))
    };

    UseSearchAndFilterHandle {
        state,
        set_search_term,
        set_main_filter,
        set_custom_filter,
        set_current_page,
        reset_search,
    }
}
