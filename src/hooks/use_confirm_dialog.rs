use std::rc::Rc;

use yew::prelude::*;

use crate::state::{ConfirmDialogAction, ConfirmDialogState, ConfirmRequest};

impl Reducible for ConfirmDialogState {
    type Action = ConfirmDialogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Runs the pending action of `dialog` in the background. `dispatch`
/// receives `ConfirmStarted` right away and `ConfirmFinished` once the
/// action settles, success or not. Does nothing when no action is pending
/// or one is already running.
pub(crate) fn spawn_confirm<D>(dialog: &ConfirmDialogState, dispatch: D)
where
    D: Fn(ConfirmDialogAction) + 'static,
{
    let Some(on_confirm) = dialog.pending_action() else {
        log::warn!("⚠️ Confirm requested with no pending dialog");
        return;
    };

    dispatch(ConfirmDialogAction::ConfirmStarted);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = on_confirm().await {
            log::error!("❌ Confirmed action failed: {}", e);
        }
        dispatch(ConfirmDialogAction::ConfirmFinished);
    });
}

pub struct UseConfirmDialogHandle {
    pub state: UseReducerHandle<ConfirmDialogState>,
    pub show_dialog: Callback<ConfirmRequest>,
    pub hide_dialog: Callback<()>,
    pub handle_confirm: Callback<()>,
}

#[hook]
pub fn use_confirm_dialog() -> UseConfirmDialogHandle {
    let state = use_reducer(ConfirmDialogState::default);

    let show_dialog = {
        let state = state.clone();
        Callback::from(move |request: ConfirmRequest| state.dispatch(ConfirmDialogAction::Show(request)))
    };

    let hide_dialog = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ConfirmDialogAction::Hide))
    };

    let handle_confirm = {
        let state = state.clone();
        Callback::from(move |_| {
            let dispatcher = state.dispatcher();
            spawn_confirm(&state, move |action| dispatcher.dispatch(action));
        })
    };

    UseConfirmDialogHandle {
        state,
        show_dialog,
        hide_dialog,
        handle_confirm,
    }
}
