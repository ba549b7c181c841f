use std::rc::Rc;

use yew::prelude::*;

use crate::context::{use_api_client, use_config, use_toast};
use crate::error::AppError;
use crate::hooks::use_confirm_dialog::spawn_confirm;
use crate::hooks::use_fetch::{use_fetch, UseFetchHandle};
use crate::models::{Activity, Skill, Volunteer};
use crate::services::{ActivityApi, SkillApi, VolunteerApi};
use crate::state::{ConfirmDialogAction, SearchAction};
use crate::viewmodels::{outcome, AssignmentChange, VolunteersAction, VolunteersPage};

impl Reducible for VolunteersPage {
    type Action = VolunteersAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

pub struct UseVolunteersPageHandle {
    pub page: UseReducerHandle<VolunteersPage>,
    pub volunteers: UseFetchHandle<Vec<Volunteer>>,
    pub activities: UseFetchHandle<Vec<Activity>>,
    pub skills: UseFetchHandle<Vec<Skill>>,
    pub submit_create: Callback<()>,
    pub submit_edit: Callback<()>,
    pub toggle_status: Callback<Volunteer>,
    /// Assign / unassign an activity for the volunteer in the assignment modal.
    pub change_assignment: Callback<(String, AssignmentChange)>,
    pub request_delete: Callback<Volunteer>,
    pub confirm: Callback<()>,
}

#[hook]
pub fn use_volunteers_page() -> UseVolunteersPageHandle {
    let client = use_api_client();
    let notify = use_toast();
    let items_per_page = use_config().items_per_page;
    let page = use_reducer(move || VolunteersPage::default().with_items_per_page(items_per_page));

    let volunteers = use_fetch(client.clone(), |client| async move { client.list_volunteers().await });
    let activities = use_fetch(client.clone(), |client| async move { client.list_activities().await });
    let skills = use_fetch(client.clone(), |client| async move { client.list_skills().await });

    {
        let page = page.clone();
        use_effect_with((*volunteers.state).clone(), move |fetched| {
            if let Some(rows) = fetched.data() {
                page.dispatch(VolunteersAction::Search(SearchAction::SetData(rows.clone())));
            }
            || ()
        });
    }

    let submit_create = {
        let page = page.clone();
        let client = client.clone();
        let notify = notify.clone();
        let refetch = volunteers.refetch.clone();
        Callback::from(move |_| {
            let (action, payload) = page.start_create();
            page.dispatch(action);
            let Ok(payload) = payload else {
                return;
            };

            let page = page.clone();
            let client = client.clone();
            let notify = notify.clone();
            let refetch = refetch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.create_volunteer(payload).await;
                let (action, settled) = VolunteersPage::settle_create(result, &|t| notify.emit(t));
                page.dispatch(action);
                if settled.is_ok() {
                    refetch.emit(());
                }
            });
        })
    };

    let submit_edit = {
        let page = page.clone();
        let client = client.clone();
        let notify = notify.clone();
        let refetch = volunteers.refetch.clone();
        Callback::from(move |_| {
            let (action, payload) = page.start_update();
            page.dispatch(action);
            let Ok((id, payload)) = payload else {
                return;
            };

            let page = page.clone();
            let client = client.clone();
            let notify = notify.clone();
            let refetch = refetch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.update_volunteer(&id, payload).await;
                let (action, settled) = VolunteersPage::settle_update(result, &|t| notify.emit(t));
                page.dispatch(action);
                if settled.is_ok() {
                    refetch.emit(());
                }
            });
        })
    };

    let toggle_status = {
        let client = client.clone();
        let notify = notify.clone();
        let refetch = volunteers.refetch.clone();
        Callback::from(move |volunteer: Volunteer| {
            let client = client.clone();
            let notify = notify.clone();
            let refetch = refetch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = client
                    .set_volunteer_status(&volunteer.id, volunteer.status.toggled())
                    .await;
                if VolunteersPage::settle_status(result, &|t| notify.emit(t)).is_ok() {
                    refetch.emit(());
                }
            });
        })
    };

    let change_assignment = {
        let page = page.clone();
        let client = client.clone();
        let notify = notify.clone();
        let refetch = volunteers.refetch.clone();
        Callback::from(move |(activity_id, change): (String, AssignmentChange)| {
            let Some(volunteer_id) = page.assignment_target() else {
                return;
            };

            let page = page.clone();
            let client = client.clone();
            let notify = notify.clone();
            let refetch = refetch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match change {
                    AssignmentChange::Assign => client.assign_activity(&volunteer_id, &activity_id).await,
                    AssignmentChange::Unassign => client.unassign_activity(&volunteer_id, &activity_id).await,
                };
                let (action, _) = VolunteersPage::settle_assignment(activity_id, change, result, &|t| notify.emit(t));
                if let Some(action) = action {
                    page.dispatch(action);
                    refetch.emit(());
                }
            });
        })
    };

    let request_delete = {
        let page = page.clone();
        let client = client.clone();
        let notify = notify.clone();
        let refetch = volunteers.refetch.clone();
        Callback::from(move |volunteer: Volunteer| {
            let client = client.clone();
            let notify = notify.clone();
            let refetch = refetch.clone();
            let id = volunteer.id.clone();
            let request = VolunteersPage::delete_request(&volunteer, move || {
                let client = client.clone();
                let notify = notify.clone();
                let refetch = refetch.clone();
                let id = id.clone();
                async move {
                    let result = client.delete_volunteer(&id).await;
                    notify.emit(outcome::volunteer_deleted(&result));
                    if result.is_ok() {
                        refetch.emit(());
                    }
                    result.map_err(AppError::from)
                }
            });
            page.dispatch(VolunteersAction::Confirm(ConfirmDialogAction::Show(request)));
        })
    };

    let confirm = {
        let page = page.clone();
        Callback::from(move |_| {
            let dispatcher = page.dispatcher();
            spawn_confirm(&page.confirm, move |action| {
                dispatcher.dispatch(VolunteersAction::Confirm(action));
            });
        })
    };

    UseVolunteersPageHandle {
        page,
        volunteers,
        activities,
        skills,
        submit_create,
        submit_edit,
        toggle_status,
        change_assignment,
        request_delete,
        confirm,
    }
}
