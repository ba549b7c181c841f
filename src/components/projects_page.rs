use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::search_bar::{FilterSelect, SearchBar};
use crate::context::{use_api_client, use_config};
use crate::hooks::{use_fetch, use_modal, use_search_and_filter};
use crate::models::Project;
use crate::services::ProjectApi;
use crate::state::SearchFilterState;
use crate::utils::constants::MAIN_FILTER;

const SEARCH_FIELDS: [&str; 3] = ["name", "description", "status"];

/// Projects searchable by text and narrowed by status.
pub fn project_search(rows: Vec<Project>) -> SearchFilterState<Project> {
    SearchFilterState::new(rows, &SEARCH_FIELDS).register_filter(MAIN_FILTER, |p: &Project, status| {
        p.status.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(status))
    })
}

fn statuses(rows: &[Project]) -> Vec<String> {
    let mut found: Vec<String> = rows.iter().filter_map(|p| p.status.clone()).collect();
    found.sort();
    found.dedup();
    found
}

#[function_component(ProjectsScreen)]
pub fn projects_screen() -> Html {
    let client = use_api_client();
    let items_per_page = use_config().items_per_page;
    let projects = use_fetch(client, |client| async move { client.list_projects().await });
    let rows = projects.state.rows();
    let search = use_search_and_filter(rows.clone(), move |rows| project_search(rows).with_items_per_page(items_per_page));
    let viewer = use_modal::<Project>();

    let status_options: Vec<(String, String)> = statuses(&rows).into_iter().map(|s| (s.clone(), s)).collect();
    let page_rows: Vec<Project> = search.state.paginated_data().into_iter().cloned().collect();

    html! {
        <section class="page projects-page">
            <header class="page-header">
                <h1>{"Projects"}</h1>
            </header>

            <div class="toolbar">
                <SearchBar on_search={search.set_search_term.clone()} placeholder="Search projects" />
                <FilterSelect
                    value={search.state.main_filter().to_string()}
                    options={status_options}
                    on_change={search.set_main_filter.clone()}
                    all_label="All statuses"
                />
            </div>

            if projects.is_loading() {
                <p class="loading">{"Loading projects..."}</p>
            } else if let Some(error) = projects.state.error() {
                <p class="error">{ format!("Could not load projects: {}", error) }</p>
            } else if page_rows.is_empty() {
                <p class="empty">{"No projects match the current filters."}</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Period"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for page_rows.into_iter().map(|p| {
                            let onclick = {
                                let p = p.clone();
                                viewer.open.reform(move |_: MouseEvent| Some(p.clone()))
                            };
                            html! {
                                <tr key={p.id.clone()} {onclick}>
                                    <td>{ &p.name }</td>
                                    <td>{ p.period() }</td>
                                    <td>{ p.status.clone().unwrap_or_default() }</td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }

            <Pagination
                current_page={search.state.current_page()}
                total_pages={search.state.total_pages()}
                total_items={search.state.total_items()}
                on_page={search.set_current_page.clone()}
            />

            <Modal open={viewer.state.is_open} title="Project" on_close={viewer.close.clone()}>
                if let Some(p) = viewer.state.payload() {
                    <h3>{ &p.name }</h3>
                    <p class="muted">{ p.period() }</p>
                    <p>{ &p.description }</p>
                }
            </Modal>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SearchAction;
    use crate::viewmodels::test_support::{date, project};

    #[test]
    fn status_filter_ignores_case_and_missing_status() {
        let mut p1 = project("p1", None);
        p1.status = Some("Active".into());
        let mut p2 = project("p2", None);
        p2.status = Some("Closed".into());
        let p3 = project("p3", None);
        let mut state = project_search(vec![p1, p2, p3]);

        state.apply(SearchAction::SetMainFilter("active".into()));

        let ids: Vec<&str> = state.filtered_data().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1"]);
        assert_eq!(statuses(&[project("x", None)]), Vec::<String>::new());
    }

    #[test]
    fn period_shows_open_ends() {
        let mut p = project("p1", Some(date(2024, 3, 1)));
        assert_eq!(p.period(), "2024-03-01 – …");
        p.end_date = Some(date(2024, 6, 30));
        assert_eq!(p.period(), "2024-03-01 – 2024-06-30");
    }
}
