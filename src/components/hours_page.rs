// ============================================================================
// HOURS SCREEN - Work-log review (approve / reject / delete) and logging
// ============================================================================

use serde_json::Value;
use yew::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::field::{bind_field, field_error, number, optional, SelectField, TextAreaField, TextField};
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::search_bar::{FilterSelect, SearchBar};
use crate::hooks::use_hours_page;
use crate::models::{WorkLog, WorkLogStatus};
use crate::state::{ConfirmDialogAction, ModalAction, SearchAction};
use crate::viewmodels::{HoursAction, HoursPage};

#[function_component(HoursScreen)]
pub fn hours_screen() -> Html {
    let handle = use_hours_page();
    let page = handle.page.clone();
    let search = &page.search;

    let on_search = {
        let page = page.clone();
        Callback::from(move |term: String| page.dispatch(HoursAction::Search(SearchAction::SetSearchTerm(term))))
    };
    let on_status = {
        let page = page.clone();
        Callback::from(move |value: String| page.dispatch(HoursAction::Search(SearchAction::SetMainFilter(value))))
    };
    let on_page = {
        let page = page.clone();
        Callback::from(move |n: usize| page.dispatch(HoursAction::Search(SearchAction::SetCurrentPage(n))))
    };
    let open_log = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.dispatch(HoursAction::OpenLog))
    };
    let close_log = {
        let page = page.clone();
        Callback::from(move |_| page.dispatch(HoursAction::LogModal(ModalAction::Close)))
    };
    let close_view = {
        let page = page.clone();
        Callback::from(move |_| page.dispatch(HoursAction::ViewModal(ModalAction::Close)))
    };
    let on_cancel = {
        let page = page.clone();
        Callback::from(move |_| page.dispatch(HoursAction::Confirm(ConfirmDialogAction::Hide)))
    };

    let status_options = vec![
        ("pending".to_string(), "Pending".to_string()),
        ("approved".to_string(), "Approved".to_string()),
        ("rejected".to_string(), "Rejected".to_string()),
    ];
    let rows: Vec<WorkLog> = search.paginated_data().into_iter().cloned().collect();

    html! {
        <section class="page hours-page">
            <header class="page-header">
                <h1>{"Hours"}</h1>
                <button class="btn btn-primary" onclick={open_log}>{"+ Log hours"}</button>
            </header>

            <div class="toolbar">
                <SearchBar on_search={on_search} placeholder="Search by volunteer, activity or description" />
                <FilterSelect value={search.main_filter().to_string()} options={status_options} on_change={on_status} all_label="All statuses" />
            </div>

            if handle.work_logs.is_loading() {
                <p class="loading">{"Loading work logs..."}</p>
            } else if let Some(error) = handle.work_logs.state.error() {
                <p class="error">{ format!("Could not load work logs: {}", error) }</p>
            } else if rows.is_empty() {
                <p class="empty">{"No work logs match the current filters."}</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Volunteer"}</th><th>{"Activity"}</th><th>{"Date"}</th>
                            <th>{"Hours"}</th><th>{"Status"}</th><th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.into_iter().map(|w| work_log_row(w, &page, &handle.review, &handle.request_delete)) }
                    </tbody>
                </table>
            }

            <Pagination
                current_page={search.current_page()}
                total_pages={search.total_pages()}
                total_items={search.total_items()}
                on_page={on_page}
            />

            <Modal open={page.log_modal.is_open} title="Log hours" on_close={close_log}>
                { log_form(&page, &handle) }
                <button class="btn btn-primary" disabled={page.log_form.is_submitting()} onclick={handle.submit_log.reform(|_: MouseEvent| ())}>
                    { if page.log_form.is_submitting() { "Saving..." } else { "Log hours" } }
                </button>
            </Modal>

            <Modal open={page.view_modal.is_open} title="Work log" on_close={close_view}>
                if let Some(w) = page.view_modal.payload() {
                    <dl class="details">
                        <dt>{"Volunteer"}</dt><dd>{ &w.volunteer_name }</dd>
                        <dt>{"Activity"}</dt><dd>{ w.activity_name.clone().unwrap_or_else(|| "-".into()) }</dd>
                        <dt>{"Date"}</dt><dd>{ w.date.to_string() }</dd>
                        <dt>{"Hours"}</dt><dd>{ w.hours.to_string() }</dd>
                        <dt>{"Status"}</dt><dd>{ w.status.as_str() }</dd>
                        <dt>{"Description"}</dt><dd>{ &w.description }</dd>
                    </dl>
                }
            </Modal>

            <ConfirmDialog state={page.confirm.clone()} on_confirm={handle.confirm.clone()} {on_cancel} />
        </section>
    }
}

fn work_log_row(
    w: WorkLog,
    page: &UseReducerHandle<HoursPage>,
    review: &Callback<(String, WorkLogStatus)>,
    request_delete: &Callback<WorkLog>,
) -> Html {
    let view = {
        let dispatcher = page.dispatcher();
        let w = w.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(HoursAction::ViewModal(ModalAction::Open(Some(w.clone())))))
    };
    let set_status = |status: WorkLogStatus| {
        let id = w.id.clone();
        review.reform(move |_: MouseEvent| (id.clone(), status))
    };
    let delete = {
        let w = w.clone();
        request_delete.reform(move |_: MouseEvent| w.clone())
    };
    let pending = w.status == WorkLogStatus::Pending;

    html! {
        <tr key={w.id.clone()}>
            <td><a onclick={view}>{ &w.volunteer_name }</a></td>
            <td>{ w.activity_name.clone().unwrap_or_else(|| "-".into()) }</td>
            <td>{ w.date.to_string() }</td>
            <td>{ w.hours.to_string() }</td>
            <td><span class={format!("badge badge-{}", w.status.as_str())}>{ w.status.as_str() }</span></td>
            <td class="actions">
                if pending {
                    <>
                        <button class="btn btn-sm btn-success" onclick={set_status(WorkLogStatus::Approved)}>{"Approve"}</button>
                        <button class="btn btn-sm" onclick={set_status(WorkLogStatus::Rejected)}>{"Reject"}</button>
                    </>
                }
                <button class="btn btn-sm btn-danger" onclick={delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}

fn log_form(page: &UseReducerHandle<HoursPage>, handle: &crate::hooks::UseHoursPageHandle) -> Html {
    let values = page.log_form.values();
    let errors = page.log_form.errors();
    let bind = |field: &'static str| bind_field(page, HoursAction::LogForm, field);

    let volunteer_options: Vec<(String, String)> = handle
        .volunteers
        .state
        .rows()
        .into_iter()
        .map(|v| (v.id, v.name))
        .collect();
    let project_options: Vec<(String, String)> = page.projects.iter().map(|p| (p.id.clone(), p.name.clone())).collect();
    let activity_options: Vec<(String, String)> = handle
        .activities
        .state
        .rows()
        .into_iter()
        .filter(|a| values.project_id.is_empty() || a.project_id.as_deref() == Some(values.project_id.as_str()))
        .map(|a| (a.id, a.name))
        .collect();

    html! {
        <>
            <SelectField
                label="Volunteer"
                value={values.volunteer_id.clone()}
                options={volunteer_options}
                placeholder="Select a volunteer"
                on_change={bind("volunteer_id").reform(|s: String| Value::from(s))}
                error={field_error(errors, "volunteer_id")}
            />
            <SelectField
                label="Project"
                value={values.project_id.clone()}
                options={project_options}
                placeholder="Select a project"
                on_change={bind("project_id").reform(|s: String| Value::from(s))}
                error={field_error(errors, "project_id")}
            />
            <SelectField
                label="Activity"
                value={values.activity_id.clone().unwrap_or_default()}
                options={activity_options}
                placeholder="No specific activity"
                on_change={bind("activity_id").reform(optional)}
            />
            <TextField
                label="Date"
                input_type="date"
                value={values.date.map(|d| d.to_string()).unwrap_or_default()}
                on_input={bind("date").reform(optional)}
                error={field_error(errors, "date")}
            />
            <TextField
                label="Hours"
                input_type="number"
                value={if values.hours > 0.0 { values.hours.to_string() } else { String::new() }}
                on_input={bind("hours").reform(|s: String| match number(s) {
                    Value::Null => Value::from(0),
                    other => other,
                })}
                error={field_error(errors, "hours")}
            />
            <TextAreaField
                label="Description"
                value={values.description.clone()}
                on_input={bind("description").reform(|s: String| Value::from(s))}
            />
        </>
    }
}
