use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::search_bar::{FilterSelect, SearchBar};
use crate::context::{use_api_client, use_config};
use crate::hooks::{use_fetch, use_modal, use_search_and_filter};
use crate::models::Resource;
use crate::services::ResourceApi;
use crate::state::SearchFilterState;
use crate::utils::constants::MAIN_FILTER;

const SEARCH_FIELDS: [&str; 3] = ["title", "description", "category"];

/// Resources searchable by text and narrowed by category.
pub fn resource_search(rows: Vec<Resource>) -> SearchFilterState<Resource> {
    SearchFilterState::new(rows, &SEARCH_FIELDS).register_filter(MAIN_FILTER, |r: &Resource, category| {
        r.category.as_deref().is_some_and(|c| c.eq_ignore_ascii_case(category))
    })
}

fn categories(rows: &[Resource]) -> Vec<String> {
    let mut found: Vec<String> = rows.iter().filter_map(|r| r.category.clone()).collect();
    found.sort();
    found.dedup();
    found
}

#[function_component(ResourcesScreen)]
pub fn resources_screen() -> Html {
    let client = use_api_client();
    let items_per_page = use_config().items_per_page;
    let resources = use_fetch(client, |client| async move { client.list_resources().await });
    let rows = resources.state.rows();
    let search = use_search_and_filter(rows.clone(), move |rows| resource_search(rows).with_items_per_page(items_per_page));
    let viewer = use_modal::<Resource>();

    let category_options: Vec<(String, String)> = categories(&rows).into_iter().map(|c| (c.clone(), c)).collect();
    let page_rows: Vec<Resource> = search.state.paginated_data().into_iter().cloned().collect();

    html! {
        <section class="page resources-page">
            <header class="page-header">
                <h1>{"Resources"}</h1>
            </header>

            <div class="toolbar">
                <SearchBar on_search={search.set_search_term.clone()} placeholder="Search resources" />
                <FilterSelect
                    value={search.state.main_filter().to_string()}
                    options={category_options}
                    on_change={search.set_main_filter.clone()}
                    all_label="All categories"
                />
            </div>

            if resources.is_loading() {
                <p class="loading">{"Loading resources..."}</p>
            } else if let Some(error) = resources.state.error() {
                <p class="error">{ format!("Could not load resources: {}", error) }</p>
            } else if page_rows.is_empty() {
                <p class="empty">{"No resources match the current filters."}</p>
            } else {
                <ul class="resource-list">
                    { for page_rows.into_iter().map(|r| {
                        let onclick = {
                            let r = r.clone();
                            viewer.open.reform(move |_: MouseEvent| Some(r.clone()))
                        };
                        html! {
                            <li key={r.id.clone()} class="resource-card" {onclick}>
                                <strong>{ &r.title }</strong>
                                if let Some(category) = &r.category {
                                    <span class="badge">{ category }</span>
                                }
                                <p class="muted">{ &r.description }</p>
                            </li>
                        }
                    }) }
                </ul>
            }

            <Pagination
                current_page={search.state.current_page()}
                total_pages={search.state.total_pages()}
                total_items={search.state.total_items()}
                on_page={search.set_current_page.clone()}
            />

            <Modal open={viewer.state.is_open} title="Resource" on_close={viewer.close.clone()}>
                if let Some(r) = viewer.state.payload() {
                    <h3>{ &r.title }</h3>
                    <p>{ &r.description }</p>
                    if let Some(url) = &r.url {
                        <a href={url.clone()} target="_blank" rel="noopener noreferrer">{"Open"}</a>
                    }
                }
            </Modal>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SearchAction;

    fn resource(id: &str, title: &str, category: Option<&str>) -> Resource {
        Resource {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: category.map(Into::into),
            url: None,
        }
    }

    #[test]
    fn category_filter_narrows_after_search() {
        let mut state = resource_search(vec![
            resource("r1", "First aid guide", Some("Training")),
            resource("r2", "Volunteer agreement", Some("Forms")),
            resource("r3", "First steps", None),
        ]);

        state.apply(SearchAction::SetSearchTerm("first".into()));
        assert_eq!(state.total_items(), 2);

        state.apply(SearchAction::SetMainFilter("training".into()));
        let ids: Vec<&str> = state.filtered_data().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1"]);
    }

    #[test]
    fn categories_are_sorted_and_unique() {
        let rows = vec![
            resource("r1", "a", Some("Training")),
            resource("r2", "b", Some("Forms")),
            resource("r3", "c", Some("Training")),
            resource("r4", "d", None),
        ];
        assert_eq!(categories(&rows), vec!["Forms".to_string(), "Training".to_string()]);
    }
}
