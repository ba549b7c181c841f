// ============================================================================
// VOLUNTEERS SCREEN - List, search, CRUD modals and activity assignment
// ============================================================================

use serde_json::Value;
use yew::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::field::{bind_field, field_error, TextField};
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::search_bar::{FilterSelect, SearchBar};
use crate::hooks::use_volunteers_page;
use crate::models::{Activity, Skill, Volunteer, VolunteerForm, VolunteerStatus};
use crate::state::{ConfirmDialogAction, FormAction, FormState, ModalAction, SearchAction};
use crate::utils::constants::FILTER_ALL;
use crate::viewmodels::volunteers_viewmodel::SKILL_FILTER;
use crate::viewmodels::{AssignmentChange, VolunteersAction, VolunteersPage};

#[function_component(VolunteersScreen)]
pub fn volunteers_screen() -> Html {
    let handle = use_volunteers_page();
    let page = handle.page.clone();
    let search = &page.search;

    let on_search = {
        let page = page.clone();
        Callback::from(move |term: String| page.dispatch(VolunteersAction::Search(SearchAction::SetSearchTerm(term))))
    };
    let on_status = {
        let page = page.clone();
        Callback::from(move |value: String| page.dispatch(VolunteersAction::Search(SearchAction::SetMainFilter(value))))
    };
    let on_skill = {
        let page = page.clone();
        Callback::from(move |value: String| {
            page.dispatch(VolunteersAction::Search(SearchAction::SetCustomFilter(SKILL_FILTER.into(), value)));
        })
    };
    let on_page = {
        let page = page.clone();
        Callback::from(move |n: usize| page.dispatch(VolunteersAction::Search(SearchAction::SetCurrentPage(n))))
    };
    let open_create = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.dispatch(VolunteersAction::OpenCreate))
    };

    let skills = handle.skills.state.rows();
    let skill_options: Vec<(String, String)> = skills.iter().map(|s| (s.name.clone(), s.name.clone())).collect();
    let status_options = vec![
        ("active".to_string(), "Active".to_string()),
        ("inactive".to_string(), "Inactive".to_string()),
    ];

    let rows = search.paginated_data().into_iter().cloned().collect::<Vec<_>>();

    html! {
        <section class="page volunteers-page">
            <header class="page-header">
                <h1>{"Volunteers"}</h1>
                <button class="btn btn-primary" onclick={open_create}>{"+ New volunteer"}</button>
            </header>

            <div class="toolbar">
                <SearchBar on_search={on_search} placeholder="Search by name, email or skill" />
                <FilterSelect value={search.main_filter().to_string()} options={status_options} on_change={on_status} all_label="All statuses" />
                <FilterSelect value={search.filter(SKILL_FILTER).unwrap_or(FILTER_ALL).to_string()} options={skill_options} on_change={on_skill} all_label="All skills" />
            </div>

            if handle.volunteers.is_loading() {
                <p class="loading">{"Loading volunteers..."}</p>
            } else if let Some(error) = handle.volunteers.state.error() {
                <p class="error">{ format!("Could not load volunteers: {}", error) }</p>
            } else if rows.is_empty() {
                <p class="empty">{"No volunteers match the current filters."}</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th><th>{"Email"}</th><th>{"Skills"}</th>
                            <th>{"Hours"}</th><th>{"Status"}</th><th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.into_iter().map(|v| volunteer_row(v, &handle.page, &handle.toggle_status, &handle.request_delete)) }
                    </tbody>
                </table>
            }

            <Pagination
                current_page={search.current_page()}
                total_pages={search.total_pages()}
                total_items={search.total_items()}
                on_page={on_page}
            />

            <Modal
                open={page.create_modal.is_open}
                title="New volunteer"
                on_close={close(&page, VolunteersAction::CreateModal)}
            >
                { volunteer_form(&page.create_form, &page, VolunteersAction::CreateForm, &skills) }
                <button class="btn btn-primary" disabled={page.create_form.is_submitting()} onclick={handle.submit_create.reform(|_: MouseEvent| ())}>
                    { if page.create_form.is_submitting() { "Saving..." } else { "Create" } }
                </button>
            </Modal>

            <Modal
                open={page.edit_modal.is_open}
                title="Edit volunteer"
                on_close={close(&page, VolunteersAction::EditModal)}
            >
                { volunteer_form(&page.edit_form, &page, VolunteersAction::EditForm, &skills) }
                <button class="btn btn-primary" disabled={page.edit_form.is_submitting()} onclick={handle.submit_edit.reform(|_: MouseEvent| ())}>
                    { if page.edit_form.is_submitting() { "Saving..." } else { "Save" } }
                </button>
            </Modal>

            <Modal
                open={page.view_modal.is_open}
                title="Volunteer"
                on_close={close(&page, VolunteersAction::ViewModal)}
            >
                if let Some(v) = page.view_modal.payload() {
                    <dl class="details">
                        <dt>{"Name"}</dt><dd>{ &v.name }</dd>
                        <dt>{"Email"}</dt><dd>{ &v.email }</dd>
                        <dt>{"Phone"}</dt><dd>{ v.phone.clone().unwrap_or_else(|| "-".into()) }</dd>
                        <dt>{"Skills"}</dt><dd>{ v.skills.join(", ") }</dd>
                        <dt>{"Hours logged"}</dt><dd>{ format!("{:.1}", v.total_hours) }</dd>
                    </dl>
                }
            </Modal>

            <Modal
                open={page.assign_modal.is_open}
                title="Assign activities"
                on_close={close(&page, VolunteersAction::AssignModal)}
            >
                if let Some(v) = page.assign_modal.payload() {
                    { assignment_list(v, &handle.activities.state.rows(), &handle.change_assignment) }
                }
            </Modal>

            <ConfirmDialog
                state={page.confirm.clone()}
                on_confirm={handle.confirm.clone()}
                on_cancel={{
                    let page = page.clone();
                    Callback::from(move |_| page.dispatch(VolunteersAction::Confirm(ConfirmDialogAction::Hide)))
                }}
            />
        </section>
    }
}

fn close<P, F>(page: &UseReducerHandle<VolunteersPage>, wrap: F) -> Callback<()>
where
    P: 'static,
    F: Fn(ModalAction<P>) -> VolunteersAction + 'static,
{
    let dispatcher = page.dispatcher();
    Callback::from(move |_| dispatcher.dispatch(wrap(ModalAction::Close)))
}

fn volunteer_row(
    v: Volunteer,
    page: &UseReducerHandle<VolunteersPage>,
    toggle_status: &Callback<Volunteer>,
    request_delete: &Callback<Volunteer>,
) -> Html {
    let dispatch = |action: fn(Volunteer) -> VolunteersAction| {
        let dispatcher = page.dispatcher();
        let v = v.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action(v.clone())))
    };
    let view = dispatch(|v| VolunteersAction::ViewModal(ModalAction::Open(Some(v))));
    let edit = dispatch(VolunteersAction::OpenEdit);
    let assign = dispatch(|v| VolunteersAction::AssignModal(ModalAction::Open(Some(v))));
    let toggle = {
        let v = v.clone();
        toggle_status.reform(move |_: MouseEvent| v.clone())
    };
    let delete = {
        let v = v.clone();
        request_delete.reform(move |_: MouseEvent| v.clone())
    };
    let (badge, toggle_label) = match v.status {
        VolunteerStatus::Active => ("badge badge-success", "Deactivate"),
        VolunteerStatus::Inactive => ("badge", "Activate"),
    };

    html! {
        <tr key={v.id.clone()}>
            <td><a onclick={view}>{ &v.name }</a></td>
            <td>{ &v.email }</td>
            <td>{ v.skills.join(", ") }</td>
            <td>{ format!("{:.1}", v.total_hours) }</td>
            <td><span class={badge}>{ v.status.as_str() }</span></td>
            <td class="actions">
                <button class="btn btn-sm" onclick={edit}>{"Edit"}</button>
                <button class="btn btn-sm" onclick={assign}>{"Activities"}</button>
                <button class="btn btn-sm" onclick={toggle}>{ toggle_label }</button>
                <button class="btn btn-sm btn-danger" onclick={delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}

fn volunteer_form(
    form: &FormState<VolunteerForm>,
    page: &UseReducerHandle<VolunteersPage>,
    wrap: fn(FormAction<VolunteerForm>) -> VolunteersAction,
    skills: &[Skill],
) -> Html {
    let values = form.values();
    let errors = form.errors();
    let text = |field: &'static str| bind_field(page, wrap, field).reform(|s: String| Value::from(s));

    let skill_toggles = skills.iter().map(|skill| {
        let checked = values.skills.iter().any(|s| s == &skill.name);
        let next: Vec<String> = if checked {
            values.skills.iter().filter(|s| **s != skill.name).cloned().collect()
        } else {
            values.skills.iter().cloned().chain(std::iter::once(skill.name.clone())).collect()
        };
        let onchange = bind_field(page, wrap, "skills").reform(move |_: Event| Value::from(next.clone()));
        html! {
            <label class="checkbox" key={skill.id.clone()}>
                <input type="checkbox" checked={checked} {onchange} />
                { &skill.name }
            </label>
        }
    });

    html! {
        <>
            <TextField label="Name" value={values.name.clone()} on_input={text("name")} error={field_error(errors, "name")} />
            <TextField label="Email" input_type="email" value={values.email.clone()} on_input={text("email")} error={field_error(errors, "email")} />
            <TextField label="Phone" input_type="tel" value={values.phone.clone()} on_input={text("phone")} error={field_error(errors, "phone")} />
            <div class="form-group">
                <label>{"Skills"}</label>
                <div class="checkbox-group">{ for skill_toggles }</div>
            </div>
        </>
    }
}

fn assignment_list(volunteer: &Volunteer, activities: &[Activity], change: &Callback<(String, AssignmentChange)>) -> Html {
    if activities.is_empty() {
        return html! { <p class="empty">{"No activities yet."}</p> };
    }

    html! {
        <ul class="assignment-list">
            { for activities.iter().map(|activity| {
                let assigned = volunteer.activity_ids.contains(&activity.id);
                let (label, kind) = if assigned {
                    ("Unassign", AssignmentChange::Unassign)
                } else {
                    ("Assign", AssignmentChange::Assign)
                };
                let id = activity.id.clone();
                let onclick = change.reform(move |_: MouseEvent| (id.clone(), kind));
                html! {
                    <li key={activity.id.clone()} class={classes!(assigned.then_some("assigned"))}>
                        <span>{ &activity.name }</span>
                        <span class="muted">{ activity.status.label() }</span>
                        <button class="btn btn-sm" {onclick}>{ label }</button>
                    </li>
                }
            }) }
        </ul>
    }
}
