use std::rc::Rc;

use yew::prelude::*;

use crate::state::{ModalAction, ModalState};

impl<P: Clone + 'static> Reducible for ModalState<P> {
    type Action = ModalAction<P>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

pub struct UseModalHandle<P: Clone + 'static> {
    pub state: UseReducerHandle<ModalState<P>>,
    pub open: Callback<Option<P>>,
    pub close: Callback<()>,
    pub toggle: Callback<bool>,
}

#[hook]
pub fn use_modal<P: Clone + 'static>() -> UseModalHandle<P> {
    let state = use_reducer(ModalState::<P>::default);

    let open = {
        let state = state.clone();
        Callback::from(move |payload: Option<P>| state.dispatch(ModalAction::Open(payload)))
    };

    let close = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ModalAction::Close))
    };

    let toggle = {
        let state = state.clone();
        Callback::from(move |next_open: bool| state.dispatch(ModalAction::Toggle(next_open)))
    };

    UseModalHandle { state, open, close, toggle }
}
