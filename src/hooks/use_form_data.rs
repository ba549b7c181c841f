use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;
use yew::prelude::*;

use crate::state::{FormAction, FormState, FormValues};

impl<T: FormValues> Reducible for FormState<T> {
    type Action = FormAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Clone)]
pub struct UseFormDataHandle<T: FormValues> {
    pub state: UseReducerHandle<FormState<T>>,
    pub update_field: Callback<(String, Value)>,
    pub load: Callback<T>,
    pub reset_form: Callback<()>,
    pub validate_form: Callback<()>,
    pub set_field_error: Callback<(String, String)>,
}

impl<T: FormValues> UseFormDataHandle<T> {
    /// Callback for an input bound to `field`.
    pub fn field<V: Serialize + 'static>(&self, field: &'static str) -> Callback<V> {
        let update = self.update_field.clone();
        Callback::from(move |value: V| match serde_json::to_value(value) {
            Ok(value) => update.emit((field.to_string(), value)),
            Err(e) => log::warn!("⚠️ Invalid value for {}: {}", field, e),
        })
    }

    /// Validates and, if the values pass, runs `on_submit` in the
    /// background. `is_submitting` drops once it settles, whatever the
    /// outcome; failures are only logged.
    pub fn handle_submit<F, Fut, E>(&self, on_submit: F)
    where
        F: FnOnce(T) -> Fut + 'static,
        Fut: Future<Output = Result<(), E>> + 'static,
        E: Display + 'static,
    {
        let (action, values) = self.state.submit_step();
        self.state.dispatch(action);
        let Ok(values) = values else {
            return;
        };

        let state = self.state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = on_submit(values).await {
                log::error!("❌ Form submission failed: {}", e);
            }
            state.dispatch(FormAction::SubmitFinished);
        });
    }
}

#[hook]
pub fn use_form_data<T, I>(init: I) -> UseFormDataHandle<T>
where
    T: FormValues,
    I: FnOnce() -> FormState<T>,
{
    let state = use_reducer(init);

    let update_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (String, Value)| {
            state.dispatch(FormAction::UpdateField(field, value));
        })
    };

    let load = {
        let state = state.clone();
        Callback::from(move |values: T| state.dispatch(FormAction::Load(values)))
    };

    let reset_form = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(FormAction::Reset))
    };

    let validate_form = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(FormAction::Validate))
    };

    let set_field_error = {
        let state = state.clone();
        Callback::from(move |(field, message): (String, String)| {
            state.dispatch(FormAction::SetFieldError(field, message));
        })
    };

    UseFormDataHandle {
        state,
        update_field,
        load,
        reset_form,
        validate_form,
        set_field_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, PartialEq, Serialize, Deserialize, Default, Debug)]
    struct Login {
        email: String,
    }

    #[test]
    fn reducer_returns_fresh_state() {
        let form = Rc::new(FormState::new(Login::default()));
        let next = form
            .clone()
            .reduce(FormAction::UpdateField("email".into(), Value::from("a@b.org")));

        assert!(!Rc::ptr_eq(&form, &next));
        assert_eq!(next.values().email, "a@b.org");
        assert_eq!(form.values().email, "");
    }

    #[test]
    fn started_submission_clears_errors_in_reducer() {
        let mut form = FormState::new(Login::default());
        form.set_field_error("email", "Already registered");
        let form = Rc::new(form);

        let (action, values) = form.submit_step();
        assert!(values.is_ok());
        let next = form.reduce(action);

        assert!(next.errors().is_empty());
        assert!(next.is_submitting());
    }
}
