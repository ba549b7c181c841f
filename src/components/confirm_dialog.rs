use yew::prelude::*;

use crate::state::{ConfirmDialogState, DialogVariant};

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub state: ConfirmDialogState,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let Some(request) = props.state.request.as_ref().filter(|_| props.state.is_open) else {
        return html! {};
    };

    let busy = props.state.is_confirming;
    let confirm_class = match request.variant {
        DialogVariant::Default => "btn btn-primary",
        DialogVariant::Destructive => "btn btn-danger",
    };

    html! {
        <div class="modal active" role="alertdialog">
            <div class="modal-overlay"></div>
            <div class="modal-content confirm-dialog">
                <h2>{ &request.title }</h2>
                <p>{ &request.description }</p>
                <div class="modal-footer">
                    <button class="btn" disabled={busy} onclick={props.on_cancel.reform(|_: MouseEvent| ())}>
                        { request.cancel_label() }
                    </button>
                    <button class={confirm_class} disabled={busy} onclick={props.on_confirm.reform(|_: MouseEvent| ())}>
                        { if busy { "..." } else { request.confirm_label() } }
                    </button>
                </div>
            </div>
        </div>
    }
}
