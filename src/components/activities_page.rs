use serde_json::Value;
use yew::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::field::{bind_field, field_error, number, optional, SelectField, TextAreaField, TextField};
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::search_bar::{FilterSelect, SearchBar};
use crate::hooks::use_activities_page;
use crate::models::{Activity, ActivityForm, ActivityStatus, Project};
use crate::state::{ConfirmDialogAction, FormAction, FormState, ModalAction, SearchAction};
use crate::utils::constants::FILTER_ALL;
use crate::viewmodels::activities_viewmodel::PROJECT_FILTER;
use crate::viewmodels::{ActivitiesAction, ActivitiesPage};

#[function_component(ActivitiesScreen)]
pub fn activities_screen() -> Html {
    let handle = use_activities_page();
    let page = handle.page.clone();
    let search = &page.search;
    let projects = handle.projects.state.rows();

    let on_search = {
        let page = page.clone();
        Callback::from(move |term: String| page.dispatch(ActivitiesAction::Search(SearchAction::SetSearchTerm(term))))
    };
    let on_status = {
        let page = page.clone();
        Callback::from(move |value: String| page.dispatch(ActivitiesAction::Search(SearchAction::SetMainFilter(value))))
    };
    let on_project = {
        let page = page.clone();
        Callback::from(move |value: String| {
            page.dispatch(ActivitiesAction::Search(SearchAction::SetCustomFilter(PROJECT_FILTER.into(), value)));
        })
    };
    let on_page = {
        let page = page.clone();
        Callback::from(move |n: usize| page.dispatch(ActivitiesAction::Search(SearchAction::SetCurrentPage(n))))
    };
    let open_create = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.dispatch(ActivitiesAction::OpenCreate))
    };
    let on_cancel = {
        let page = page.clone();
        Callback::from(move |_| page.dispatch(ActivitiesAction::Confirm(ConfirmDialogAction::Hide)))
    };

    let status_options: Vec<(String, String)> = ActivityStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();
    let project_options: Vec<(String, String)> = projects.iter().map(|p| (p.id.clone(), p.name.clone())).collect();
    let rows: Vec<Activity> = search.paginated_data().into_iter().cloned().collect();

    html! {
        <section class="page activities-page">
            <header class="page-header">
                <h1>{"Activities"}</h1>
                <button class="btn btn-primary" onclick={open_create}>{"+ New activity"}</button>
            </header>

            <div class="toolbar">
                <SearchBar on_search={on_search} placeholder="Search by name, location or description" />
                <FilterSelect value={search.main_filter().to_string()} options={status_options.clone()} on_change={on_status} all_label="All statuses" />
                <FilterSelect value={search.filter(PROJECT_FILTER).unwrap_or(FILTER_ALL).to_string()} options={project_options.clone()} on_change={on_project} all_label="All projects" />
            </div>

            if handle.activities.is_loading() {
                <p class="loading">{"Loading activities..."}</p>
            } else if let Some(error) = handle.activities.state.error() {
                <p class="error">{ format!("Could not load activities: {}", error) }</p>
            } else if rows.is_empty() {
                <p class="empty">{"No activities match the current filters."}</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th><th>{"Date"}</th><th>{"Location"}</th>
                            <th>{"Volunteers"}</th><th>{"Status"}</th><th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.into_iter().map(|a| activity_row(a, &page, &handle.request_delete)) }
                    </tbody>
                </table>
            }

            <Pagination
                current_page={search.current_page()}
                total_pages={search.total_pages()}
                total_items={search.total_items()}
                on_page={on_page}
            />

            <Modal open={page.create_modal.is_open} title="New activity" on_close={close(&page, ActivitiesAction::CreateModal)}>
                { activity_form(&page.create_form, &page, ActivitiesAction::CreateForm, &status_options, &project_options) }
                <button class="btn btn-primary" disabled={page.create_form.is_submitting()} onclick={handle.submit_create.reform(|_: MouseEvent| ())}>
                    { if page.create_form.is_submitting() { "Saving..." } else { "Create" } }
                </button>
            </Modal>

            <Modal open={page.edit_modal.is_open} title="Edit activity" on_close={close(&page, ActivitiesAction::EditModal)}>
                { activity_form(&page.edit_form, &page, ActivitiesAction::EditForm, &status_options, &project_options) }
                <button class="btn btn-primary" disabled={page.edit_form.is_submitting()} onclick={handle.submit_edit.reform(|_: MouseEvent| ())}>
                    { if page.edit_form.is_submitting() { "Saving..." } else { "Save" } }
                </button>
            </Modal>

            <Modal open={page.view_modal.is_open} title="Activity" on_close={close(&page, ActivitiesAction::ViewModal)}>
                if let Some(a) = page.view_modal.payload() {
                    { activity_details(a, &projects) }
                }
            </Modal>

            <ConfirmDialog state={page.confirm.clone()} on_confirm={handle.confirm.clone()} {on_cancel} />
        </section>
    }
}

fn close<P, F>(page: &UseReducerHandle<ActivitiesPage>, wrap: F) -> Callback<()>
where
    P: 'static,
    F: Fn(ModalAction<P>) -> ActivitiesAction + 'static,
{
    let dispatcher = page.dispatcher();
    Callback::from(move |_| dispatcher.dispatch(wrap(ModalAction::Close)))
}

fn activity_row(a: Activity, page: &UseReducerHandle<ActivitiesPage>, request_delete: &Callback<Activity>) -> Html {
    let view = {
        let dispatcher = page.dispatcher();
        let a = a.clone();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(ActivitiesAction::ViewModal(ModalAction::Open(Some(a.clone()))));
        })
    };
    let edit = {
        let dispatcher = page.dispatcher();
        let a = a.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ActivitiesAction::OpenEdit(a.clone())))
    };
    let delete = {
        let a = a.clone();
        request_delete.reform(move |_: MouseEvent| a.clone())
    };
    let filled = match a.capacity {
        Some(capacity) => format!("{}/{}", a.volunteer_ids.len(), capacity),
        None => a.volunteer_ids.len().to_string(),
    };

    html! {
        <tr key={a.id.clone()}>
            <td><a onclick={view}>{ &a.name }</a></td>
            <td>{ a.date.map(|d| d.to_string()).unwrap_or_else(|| "-".into()) }</td>
            <td>{ a.location.clone().unwrap_or_default() }</td>
            <td>{ filled }</td>
            <td><span class={format!("badge badge-{}", a.status.as_str())}>{ a.status.label() }</span></td>
            <td class="actions">
                <button class="btn btn-sm" onclick={edit}>{"Edit"}</button>
                <button class="btn btn-sm btn-danger" onclick={delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}

fn activity_form(
    form: &FormState<ActivityForm>,
    page: &UseReducerHandle<ActivitiesPage>,
    wrap: fn(FormAction<ActivityForm>) -> ActivitiesAction,
    status_options: &[(String, String)],
    project_options: &[(String, String)],
) -> Html {
    let values = form.values();
    let errors = form.errors();
    let text = |field: &'static str| bind_field(page, wrap, field).reform(|s: String| Value::from(s));

    html! {
        <>
            <TextField label="Name" value={values.name.clone()} on_input={text("name")} error={field_error(errors, "name")} />
            <TextAreaField label="Description" value={values.description.clone()} on_input={text("description")} />
            <TextField label="Location" value={values.location.clone()} on_input={text("location")} />
            <TextField
                label="Date"
                input_type="date"
                value={values.date.map(|d| d.to_string()).unwrap_or_default()}
                on_input={bind_field(page, wrap, "date").reform(optional)}
                error={field_error(errors, "date")}
            />
            <TextField
                label="Capacity"
                input_type="number"
                value={values.capacity.map(|c| c.to_string()).unwrap_or_default()}
                on_input={bind_field(page, wrap, "capacity").reform(number)}
                error={field_error(errors, "capacity")}
            />
            <SelectField
                label="Status"
                value={values.status.as_str()}
                options={status_options.to_vec()}
                on_change={text("status")}
            />
            <SelectField
                label="Project"
                value={values.project_id.clone().unwrap_or_default()}
                options={project_options.to_vec()}
                placeholder="No project"
                on_change={bind_field(page, wrap, "project_id").reform(optional)}
            />
        </>
    }
}

fn activity_details(a: &Activity, projects: &[Project]) -> Html {
    let project = a
        .project_id
        .as_ref()
        .and_then(|id| projects.iter().find(|p| &p.id == id))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "-".into());

    html! {
        <dl class="details">
            <dt>{"Name"}</dt><dd>{ &a.name }</dd>
            <dt>{"Status"}</dt><dd>{ a.status.label() }</dd>
            <dt>{"Project"}</dt><dd>{ project }</dd>
            <dt>{"Date"}</dt><dd>{ a.date.map(|d| d.to_string()).unwrap_or_else(|| "-".into()) }</dd>
            <dt>{"Location"}</dt><dd>{ a.location.clone().unwrap_or_else(|| "-".into()) }</dd>
            <dt>{"Description"}</dt><dd>{ &a.description }</dd>
            <dt>{"Volunteers"}</dt><dd>{ a.volunteer_ids.len().to_string() }</dd>
        </dl>
    }
}
