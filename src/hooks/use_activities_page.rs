use std::rc::Rc;

use yew::prelude::*;

use crate::context::{use_api_client, use_config, use_toast};
use crate::error::AppError;
use crate::hooks::use_confirm_dialog::spawn_confirm;
use crate::hooks::use_fetch::{use_fetch, UseFetchHandle};
use crate::models::{Activity, Project};
use crate::services::{ActivityApi, ProjectApi};
use crate::state::{ConfirmDialogAction, SearchAction};
use crate::viewmodels::{outcome, ActivitiesAction, ActivitiesPage};

impl Reducible for ActivitiesPage {
    type Action = ActivitiesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

pub struct UseActivitiesPageHandle {
    pub page: UseReducerHandle<ActivitiesPage>,
    pub activities: UseFetchHandle<Vec<Activity>>,
    pub projects: UseFetchHandle<Vec<Project>>,
    pub submit_create: Callback<()>,
    pub submit_edit: Callback<()>,
    pub request_delete: Callback<Activity>,
    pub confirm: Callback<()>,
}

#[hook]
pub fn use_activities_page() -> UseActivitiesPageHandle {
    let client = use_api_client();
    let notify = use_toast();
    let items_per_page = use_config().items_per_page;
    let page = use_reducer(move || ActivitiesPage::default().with_items_per_page(items_per_page));

    let activities = use_fetch(client.clone(), |client| async move { client.list_activities().await });
    let projects = use_fetch(client.clone(), |client| async move { client.list_projects().await });

    {
        let page = page.clone();
        use_effect_with((*activities.state).clone(), move |fetched| {
            if let Some(rows) = fetched.data() {
                page.dispatch(ActivitiesAction::Search(SearchAction::SetData(rows.clone())));
            }
            || ()
        });
    }

    let submit_create = {
        let page = page.clone();
        let client = client.clone();
        let notify = notify.clone();
        let refetch = activities.refetch.clone();
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
                let result = client.create_activity(payload).await;
                let (action, settled) = ActivitiesPage::settle_create(result, &|t| notify.emit(t));
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
        let refetch = activities.refetch.clone();
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
                let result = client.update_activity(&id, payload).await;
                let (action, settled) = ActivitiesPage::settle_update(result, &|t| notify.emit(t));
                page.dispatch(action);
                if settled.is_ok() {
                    refetch.emit(());
                }
            });
        })
    };

    let request_delete = {
        let page = page.clone();
        let client = client.clone();
        let notify = notify.clone();
        let refetch = activities.refetch.clone();
        Callback::from(move |activity: Activity| {
            let client = client.clone();
            let notify = notify.clone();
            let refetch = refetch.clone();
            let id = activity.id.clone();
            let request = ActivitiesPage::delete_request(&activity, move || {
                let client = client.clone();
                let notify = notify.clone();
                let refetch = refetch.clone();
                let id = id.clone();
                async move {
                    let result = client.delete_activity(&id).await;
                    notify.emit(outcome::activity_deleted(&result));
                    if result.is_ok() {
                        refetch.emit(());
                    }
                    result.map_err(AppError::from)
                }
            });
            page.dispatch(ActivitiesAction::Confirm(ConfirmDialogAction::Show(request)));
        })
    };

    let confirm = {
        let page = page.clone();
        Callback::from(move |_| {
            let dispatcher = page.dispatcher();
            spawn_confirm(&page.confirm, move |action| {
                dispatcher.dispatch(ActivitiesAction::Confirm(action));
            });
        })
    };

    UseActivitiesPageHandle {
        page,
        activities,
        projects,
        submit_create,
        submit_edit,
        request_delete,
        confirm,
    }
}
