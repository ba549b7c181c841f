use std::rc::Rc;

use yew::prelude::*;

use crate::context::{use_api_client, use_config, use_toast};
use crate::error::AppError;
use crate::hooks::use_confirm_dialog::spawn_confirm;
use crate::hooks::use_fetch::{use_fetch, UseFetchHandle};
use crate::models::{Activity, Project, Volunteer, WorkLog, WorkLogStatus};
use crate::services::{ActivityApi, ProjectApi, VolunteerApi, WorkLogApi};
use crate::state::{ConfirmDialogAction, SearchAction};
use crate::viewmodels::{outcome, HoursAction, HoursPage};

impl Reducible for HoursPage {
    type Action = HoursAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

pub struct UseHoursPageHandle {
    pub page: UseReducerHandle<HoursPage>,
    pub work_logs: UseFetchHandle<Vec<WorkLog>>,
    pub volunteers: UseFetchHandle<Vec<Volunteer>>,
    pub activities: UseFetchHandle<Vec<Activity>>,
    pub projects: UseFetchHandle<Vec<Project>>,
    pub submit_log: Callback<()>,
    pub review: Callback<(String, WorkLogStatus)>,
    pub request_delete: Callback<WorkLog>,
    pub confirm: Callback<()>,
}

#[hook]
pub fn use_hours_page() -> UseHoursPageHandle {
    let client = use_api_client();
    let notify = use_toast();
    let items_per_page = use_config().items_per_page;
    let page = use_reducer(move || HoursPage::default().with_items_per_page(items_per_page));

    let work_logs = use_fetch(client.clone(), |client| async move { client.list_work_logs().await });
    let volunteers = use_fetch(client.clone(), |client| async move { client.list_volunteers().await });
    let activities = use_fetch(client.clone(), |client| async move { client.list_activities().await });
    let projects = use_fetch(client.clone(), |client| async move { client.list_projects().await });

    {
        let page = page.clone();
        use_effect_with((*work_logs.state).clone(), move |fetched| {
            if let Some(rows) = fetched.data() {
                page.dispatch(HoursAction::Search(SearchAction::SetData(rows.clone())));
            }
            || ()
        });
    }

    {
        let page = page.clone();
        use_effect_with((*projects.state).clone(), move |fetched| {
            if let Some(rows) = fetched.data() {
                page.dispatch(HoursAction::ProjectsLoaded(rows.clone()));
            }
            || ()
        });
    }

    let submit_log = {
        let page = page.clone();
        let client = client.clone();
        let notify = notify.clone();
        let refetch = work_logs.refetch.clone();
        Callback::from(move |_| {
            let (action, payload) = page.start_log();
            page.dispatch(action);
            let Ok(payload) = payload else {
                return;
            };

            let page = page.clone();
            let client = client.clone();
            let notify = notify.clone();
            let refetch = refetch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.create_work_log(payload).await;
                let (action, settled) = HoursPage::settle_log(result, &|t| notify.emit(t));
                page.dispatch(action);
                if settled.is_ok() {
                    refetch.emit(());
                }
            });
        })
    };

    let review = {
        let client = client.clone();
        let notify = notify.clone();
        let refetch = work_logs.refetch.clone();
        Callback::from(move |(id, status): (String, WorkLogStatus)| {
            let client = client.clone();
            let notify = notify.clone();
            let refetch = refetch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.set_work_log_status(&id, status).await;
                if HoursPage::settle_review(result, &|t| notify.emit(t)).is_ok() {
                    refetch.emit(());
                }
            });
        })
    };

    let request_delete = {
        let page = page.clone();
        let client = client.clone();
        let notify = notify.clone();
        let refetch = work_logs.refetch.clone();
        Callback::from(move |work_log: WorkLog| {
            let client = client.clone();
            let notify = notify.clone();
            let refetch = refetch.clone();
            let id = work_log.id.clone();
            let request = HoursPage::delete_request(&work_log, move || {
                let client = client.clone();
                let notify = notify.clone();
                let refetch = refetch.clone();
                let id = id.clone();
                async move {
                    let result = client.delete_work_log(&id).await;
                    notify.emit(outcome::work_log_deleted(&result));
                    if result.is_ok() {
                        refetch.emit(());
                    }
                    result.map_err(AppError::from)
                }
            });
            page.dispatch(HoursAction::Confirm(ConfirmDialogAction::Show(request)));
        })
    };

    let confirm = {
        let page = page.clone();
        Callback::from(move |_| {
            let dispatcher = page.dispatcher();
            spawn_confirm(&page.confirm, move |action| {
                dispatcher.dispatch(HoursAction::Confirm(action));
            });
        })
    };

    UseHoursPageHandle {
        page,
        work_logs,
        volunteers,
        activities,
        projects,
        submit_log,
        review,
        request_delete,
        confirm,
    }
}
