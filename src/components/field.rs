// ============================================================================
// FORM FIELDS - Labelled inputs with an inline error line
// ============================================================================

use serde_json::Value;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::state::{FormAction, FormValues};

/// Callback that writes a JSON value into `field` of a form living inside a
/// page reducer. `wrap` lifts the form action into the page action.
pub fn bind_field<R, T, W>(page: &UseReducerHandle<R>, wrap: W, field: &'static str) -> Callback<Value>
where
    R: Reducible + 'static,
    T: FormValues,
    W: Fn(FormAction<T>) -> R::Action + 'static,
{
    let dispatcher = page.dispatcher();
    Callback::from(move |value: Value| {
        dispatcher.dispatch(wrap(FormAction::UpdateField(field.to_string(), value)));
    })
}

/// Empty input -> `null`, so optional fields clear instead of failing.
pub fn optional(text: String) -> Value {
    let text = text.trim();
    if text.is_empty() {
        Value::Null
    } else {
        Value::from(text)
    }
}

/// Numeric input; blank or unparsable text becomes `null` / `0` so the
/// validator reports it instead of the merge.
pub fn number(text: String) -> Value {
    match text.trim().parse::<f64>() {
        Ok(n) if n.fract() == 0.0 && n >= 0.0 => Value::from(n as u64),
        Ok(n) => Value::from(n),
        Err(_) if text.trim().is_empty() => Value::Null,
        Err(_) => Value::from(0),
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = props
        .on_input
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());

    html! {
        <div class={classes!("form-group", props.error.as_ref().map(|_| "has-error"))}>
            <label>{ &props.label }</label>
            <input
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                {oninput}
            />
            if let Some(error) = &props.error {
                <span class="field-error">{ error }</span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = props
        .on_input
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value());

    html! {
        <div class={classes!("form-group", props.error.as_ref().map(|_| "has-error"))}>
            <label>{ &props.label }</label>
            <textarea value={props.value.clone()} {oninput} />
            if let Some(error) = &props.error {
                <span class="field-error">{ error }</span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    /// `(value, label)` pairs.
    pub options: Vec<(String, String)>,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = props
        .on_change
        .reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());

    html! {
        <div class={classes!("form-group", props.error.as_ref().map(|_| "has-error"))}>
            <label>{ &props.label }</label>
            <select {onchange}>
                if let Some(placeholder) = &props.placeholder {
                    <option value="" selected={props.value.is_empty()}>{ placeholder }</option>
                }
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={props.value.as_str() == value.as_str()}>{ label }</option>
                }) }
            </select>
            if let Some(error) = &props.error {
                <span class="field-error">{ error }</span>
            }
        </div>
    }
}

/// Error of `field` as a prop value.
pub fn field_error(errors: &crate::state::FieldErrors, field: &str) -> Option<AttrValue> {
    errors.get(field).map(|e| AttrValue::from(e.clone()))
}
