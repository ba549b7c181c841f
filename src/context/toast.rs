// ============================================================================
// TOAST CONTEXT - `Callback<Toast>` for any component under `ToastProvider`
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::context::use_config;
use crate::models::{Toast, ToastVariant};

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub notify: Callback<Toast>,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastQueue {
    next_id: u32,
    pub items: Vec<(u32, Toast)>,
}

pub enum ToastQueueAction {
    Push(Toast),
    Dismiss(u32),
}

impl ToastQueue {
    pub fn apply(&mut self, action: ToastQueueAction) {
        match action {
            ToastQueueAction::Push(toast) => {
                self.items.push((self.next_id, toast));
                self.next_id = self.next_id.wrapping_add(1);
            }
            ToastQueueAction::Dismiss(id) => self.items.retain(|(item_id, _)| *item_id != id),
        }
    }
}

impl Reducible for ToastQueue {
    type Action = ToastQueueAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Toast sink of the nearest provider. Outside one, toasts are only logged.
#[hook]
pub fn use_toast() -> Callback<Toast> {
    match use_context::<ToastContext>() {
        Some(context) => context.notify,
        None => Callback::from(|toast: Toast| log::warn!("⚠️ Toast without provider: {}", toast.title)),
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let duration_ms = use_config().toast_duration_ms;

    let notify = {
        let dispatcher = queue.dispatcher();
        use_callback((), move |toast: Toast, _| dispatcher.dispatch(ToastQueueAction::Push(toast)))
    };

    let on_dismiss = {
        let dispatcher = queue.dispatcher();
        use_callback((), move |id: u32, _| dispatcher.dispatch(ToastQueueAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastContext> context={ToastContext { notify }}>
            { props.children.clone() }
            <div class="toast-host">
                { for queue.items.iter().map(|(id, toast)| html! {
                    <ToastItem key={*id} id={*id} toast={toast.clone()} {duration_ms} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    id: u32,
    toast: Toast,
    duration_ms: u32,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((props.id, props.duration_ms), move |&(id, duration_ms)| {
            let timeout = Timeout::new(duration_ms, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let class = match props.toast.variant {
        ToastVariant::Default => "toast",
        ToastVariant::Success => "toast toast-success",
        ToastVariant::Destructive => "toast toast-destructive",
    };
    let close = {
        let id = props.id;
        props.on_dismiss.reform(move |_: MouseEvent| id)
    };

    html! {
        <div class={class} role="status">
            <div class="toast-title">{ &props.toast.title }</div>
            <div class="toast-description">{ &props.toast.description }</div>
            <button class="btn-close" onclick={close}>{"✕"}</button>
        </div>
    }
}
