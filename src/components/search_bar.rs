use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::context::use_config;
use crate::hooks::use_debounce;
use crate::utils::constants::FILTER_ALL;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub on_search: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

/// Text box that reports its value once typing pauses.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let delay_ms = use_config().search_debounce_ms;
    let input = use_state(String::new);
    let debounced = use_debounce((*input).clone(), delay_ms);

    {
        let on_search = props.on_search.clone();
        use_effect_with(debounced, move |term| {
            on_search.emit(term.clone());
            || ()
        });
    }

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| input.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    html! {
        <div class="search-bar">
            <span class="search-icon">{"🔍"}</span>
            <input type="search" value={(*input).clone()} placeholder={props.placeholder.clone()} {oninput} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterSelectProps {
    pub value: AttrValue,
    /// `(value, label)` pairs; an "All" entry is prepended.
    pub options: Vec<(String, String)>,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("All"))]
    pub all_label: AttrValue,
}

#[function_component(FilterSelect)]
pub fn filter_select(props: &FilterSelectProps) -> Html {
    let onchange = props
        .on_change
        .reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());

    html! {
        <select class="filter-select" {onchange}>
            <option value={FILTER_ALL} selected={props.value.as_str() == FILTER_ALL}>{ &props.all_label }</option>
            { for props.options.iter().map(|(value, label)| html! {
                <option value={value.clone()} selected={props.value.as_str() == value.as_str()}>{ label }</option>
            }) }
        </select>
    }
}
