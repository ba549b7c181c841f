// ============================================================================
// ACTIVITIES VIEWMODEL - Activities page state and handlers
// ============================================================================
// Composes one search engine, three modals (create / edit / view), the two
// forms bound to them and the delete confirmation. `apply` is the reducer
// driven by `use_activities_page`; the async `handle_*` methods run the
// same transitions end to end for callers without a reactive runtime.
// ============================================================================

use std::rc::Rc;

use crate::error::{ApiError, AppError};
use crate::models::{Activity, ActivityForm, ActivityPayload, Toast};
use crate::services::ActivityApi;
use crate::state::{
    ConfirmDialogAction, ConfirmDialogState, ConfirmRequest, FieldErrors, FormAction, FormState,
    ModalAction, ModalState, SearchAction, SearchFilterState,
};
use crate::utils::constants::MAIN_FILTER;
use crate::utils::validation::{finish, require};
use crate::viewmodels::outcome;

pub const SEARCH_FIELDS: [&str; 3] = ["name", "location", "description"];
pub const PROJECT_FILTER: &str = "project";
pub const DUPLICATE_NAME_MESSAGE: &str = "An activity with this name already exists.";

pub fn validate_activity(values: &ActivityForm) -> Option<FieldErrors> {
    let mut errors = FieldErrors::new();
    require(&mut errors, "name", &values.name, "Name is required");
    if values.name.trim().chars().count() > 120 {
        errors.insert("name".into(), "Name must be at most 120 characters".into());
    }
    if values.capacity == Some(0) {
        errors.insert("capacity".into(), "Capacity must be at least 1".into());
    }
    finish(errors)
}

#[derive(Clone)]
pub struct ActivitiesPage {
    pub search: SearchFilterState<Activity>,
    pub create_modal: ModalState<()>,
    pub edit_modal: ModalState<Activity>,
    pub view_modal: ModalState<Activity>,
    pub create_form: FormState<ActivityForm>,
    pub edit_form: FormState<ActivityForm>,
    pub confirm: ConfirmDialogState,
}

pub enum ActivitiesAction {
    Search(SearchAction<Activity>),
    CreateModal(ModalAction<()>),
    EditModal(ModalAction<Activity>),
    ViewModal(ModalAction<Activity>),
    CreateForm(FormAction<ActivityForm>),
    EditForm(FormAction<ActivityForm>),
    Confirm(ConfirmDialogAction),
    OpenCreate,
    OpenEdit(Activity),
    CreateSettled(Result<Activity, ApiError>),
    UpdateSettled(Result<Activity, ApiError>),
}

impl Default for ActivitiesPage {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ActivitiesPage {
    pub fn new(activities: Vec<Activity>) -> Self {
        let search = SearchFilterState::new(activities, &SEARCH_FIELDS)
            .register_filter(MAIN_FILTER, |a: &Activity, status| a.status.as_str() == status)
            .register_filter(PROJECT_FILTER, |a: &Activity, project_id| {
                a.project_id.as_deref() == Some(project_id)
            });

        Self {
            search,
            create_modal: ModalState::new(),
            edit_modal: ModalState::new(),
            view_modal: ModalState::new(),
            create_form: FormState::with_validator(ActivityForm::default(), validate_activity),
            edit_form: FormState::with_validator(ActivityForm::default(), validate_activity),
            confirm: ConfirmDialogState::new(),
        }
    }

    pub fn apply(&mut self, action: ActivitiesAction) {
        match action {
            ActivitiesAction::Search(action) => self.search.apply(action),
            ActivitiesAction::CreateModal(action) => self.create_modal.apply(action),
            ActivitiesAction::EditModal(action) => self.edit_modal.apply(action),
            ActivitiesAction::ViewModal(action) => self.view_modal.apply(action),
            ActivitiesAction::CreateForm(action) => self.create_form.apply(action),
            ActivitiesAction::EditForm(action) => self.edit_form.apply(action),
            ActivitiesAction::Confirm(action) => self.confirm.apply(action),
            ActivitiesAction::OpenCreate => {
                self.create_form.reset_form();
                self.create_modal.open_modal(None);
            }
            ActivitiesAction::OpenEdit(activity) => {
                self.edit_form.load(ActivityForm::from(&activity));
                self.edit_modal.open_modal(Some(activity));
            }
            ActivitiesAction::CreateSettled(result) => {
                self.create_form.finish_submit();
                match result {
                    Ok(_) => {
                        self.create_form.reset_form();
                        self.create_modal.close_modal();
                    }
                    Err(e) if e.is_conflict() => {
                        self.create_form.set_field_error("name", DUPLICATE_NAME_MESSAGE);
                    }
                    Err(_) => {}
                }
            }
            ActivitiesAction::UpdateSettled(result) => {
                self.edit_form.finish_submit();
                match result {
                    Ok(_) => self.edit_modal.close_modal(),
                    Err(e) if e.is_conflict() => {
                        self.edit_form.set_field_error("name", DUPLICATE_NAME_MESSAGE);
                    }
                    Err(_) => {}
                }
            }
        }
    }

    /// Page with a configured page size.
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.search = self.search.with_items_per_page(items_per_page);
        self
    }

    /// Validation verdict for the create form and the action recording it.
    pub fn start_create(&self) -> (ActivitiesAction, Result<ActivityPayload, FieldErrors>) {
        let (action, values) = self.create_form.submit_step();
        (ActivitiesAction::CreateForm(action), values.map(ActivityPayload::from))
    }

    /// Same for the edit form; the payload carries the id being edited.
    pub fn start_update(&self) -> (ActivitiesAction, Result<(String, ActivityPayload), FieldErrors>) {
        let Some(id) = self.edit_modal.data.as_ref().map(|a| a.id.clone()) else {
            let errors = FieldErrors::from([("name".to_string(), "No activity selected".to_string())]);
            return (ActivitiesAction::EditForm(FormAction::Rejected(errors.clone())), Err(errors));
        };
        let (action, values) = self.edit_form.submit_step();
        (ActivitiesAction::EditForm(action), values.map(|values| (id, values.into())))
    }

    /// Validates the create form and raises its submitting flag.
    pub fn begin_create(&mut self) -> Result<ActivityPayload, FieldErrors> {
        let (action, payload) = self.start_create();
        self.apply(action);
        payload
    }

    pub fn begin_update(&mut self) -> Result<(String, ActivityPayload), FieldErrors> {
        let (action, payload) = self.start_update();
        self.apply(action);
        payload
    }

    /// Emits the create toast and returns the action that settles the page.
    pub fn settle_create(
        result: Result<Activity, ApiError>,
        notify: &dyn Fn(Toast),
    ) -> (ActivitiesAction, Result<Activity, AppError>) {
        if let Some(toast) = outcome::activity_created(&result) {
            notify(toast);
        }
        let settled = result.clone().map_err(AppError::from);
        (ActivitiesAction::CreateSettled(result), settled)
    }

    pub fn settle_update(
        result: Result<Activity, ApiError>,
        notify: &dyn Fn(Toast),
    ) -> (ActivitiesAction, Result<Activity, AppError>) {
        if let Some(toast) = outcome::activity_updated(&result) {
            notify(toast);
        }
        let settled = result.clone().map_err(AppError::from);
        (ActivitiesAction::UpdateSettled(result), settled)
    }

    pub fn delete_request<F, Fut>(activity: &Activity, on_confirm: F) -> ConfirmRequest
    where
        F: Fn() -> Fut + 'static,
        Fut: std::future::Future<Output = Result<(), AppError>> + 'static,
    {
        ConfirmRequest::new(
            "Delete activity",
            format!("“{}” and its volunteer assignments will be removed. This cannot be undone.", activity.name),
            on_confirm,
        )
        .confirm_text("Delete")
        .destructive()
    }

    pub async fn refresh<A: ActivityApi + ?Sized>(&mut self, api: &A) {
        match api.list_activities().await {
            Ok(rows) => self.search.set_data(rows),
            Err(e) => log::error!("❌ Reloading activities failed: {}", e),
        }
    }

    pub async fn handle_create<A: ActivityApi + ?Sized>(
        &mut self,
        api: &A,
        notify: &dyn Fn(Toast),
    ) -> Result<Activity, AppError> {
        let payload = self.begin_create().map_err(AppError::Validation)?;
        let result = api.create_activity(payload).await;
        let (action, settled) = Self::settle_create(result, notify);
        self.apply(action);
        if settled.is_ok() {
            self.refresh(api).await;
        }
        settled
    }

    pub async fn handle_update<A: ActivityApi + ?Sized>(
        &mut self,
        api: &A,
        notify: &dyn Fn(Toast),
    ) -> Result<Activity, AppError> {
        let (id, payload) = self.begin_update().map_err(AppError::Validation)?;
        let result = api.update_activity(&id, payload).await;
        let (action, settled) = Self::settle_update(result, notify);
        self.apply(action);
        if settled.is_ok() {
            self.refresh(api).await;
        }
        settled
    }

    /// Opens the delete confirmation for `activity`; confirming deletes it.
    pub fn request_delete<A: ActivityApi + 'static>(
        &mut self,
        activity: &Activity,
        api: Rc<A>,
        notify: Rc<dyn Fn(Toast)>,
    ) {
        let id = activity.id.clone();
        let request = Self::delete_request(activity, move || {
            let api = Rc::clone(&api);
            let notify = Rc::clone(&notify);
            let id = id.clone();
            async move {
                let result = api.delete_activity(&id).await;
                notify(outcome::activity_deleted(&result));
                result.map_err(AppError::from)
            }
        });
        self.confirm.show_dialog(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityStatus, ToastVariant};
    use crate::viewmodels::test_support::{activity, FakeApi, ToastLog};
    use futures::executor::block_on;

    fn page_with_create_open(name: &str) -> ActivitiesPage {
        let mut page = ActivitiesPage::default();
        page.apply(ActivitiesAction::OpenCreate);
        page.create_form.update_field("name", name).unwrap();
        page
    }

    #[test]
    fn duplicate_name_sets_field_error_without_toast() {
        let api = FakeApi::new();
        api.fail_next(FakeApi::conflict());
        let toasts = ToastLog::default();
        let mut page = page_with_create_open("Food Drive");

        let result = block_on(page.handle_create(&api, &|t| toasts.push(t)));

        assert!(result.is_err());
        assert_eq!(page.create_form.error("name"), Some(DUPLICATE_NAME_MESSAGE));
        assert!(toasts.is_empty());
        assert!(page.create_modal.is_open);
        assert!(!page.create_form.is_submitting());
    }

    #[test]
    fn generic_failure_toasts_and_keeps_modal_open() {
        let api = FakeApi::new();
        api.fail_next(FakeApi::server_error());
        let toasts = ToastLog::default();
        let mut page = page_with_create_open("Beach Cleanup");

        assert!(block_on(page.handle_create(&api, &|t| toasts.push(t))).is_err());

        let shown = toasts.0.borrow();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].description, "Failed to create activity. Please try again.");
        assert_eq!(shown[0].variant, ToastVariant::Destructive);
        assert!(page.create_form.errors().is_empty());
        assert!(page.create_modal.is_open);
    }

    #[test]
    fn successful_create_closes_modal_and_refetches() {
        let api = FakeApi::new();
        let toasts = ToastLog::default();
        let mut page = page_with_create_open("  Food Drive ");

        let created = block_on(page.handle_create(&api, &|t| toasts.push(t))).unwrap();

        assert_eq!(created.name, "Food Drive");
        assert!(!page.create_modal.is_open);
        assert_eq!(page.create_form.values(), &ActivityForm::default());
        assert_eq!(page.search.total_items(), 1);
        assert_eq!(toasts.titles(), vec!["Activity created".to_string()]);
    }

    #[test]
    fn invalid_create_never_calls_api() {
        let api = FakeApi::new();
        let toasts = ToastLog::default();
        let mut page = page_with_create_open("   ");

        let result = block_on(page.handle_create(&api, &|t| toasts.push(t)));

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(page.create_form.error("name"), Some("Name is required"));
        assert!(api.calls.borrow().is_empty());
        assert!(toasts.is_empty());
    }

    #[test]
    fn edit_loads_record_and_updates_it() {
        let api = FakeApi::new();
        api.activities.borrow_mut().push(activity("a1", "Soup Kitchen"));
        let toasts = ToastLog::default();
        let mut page = ActivitiesPage::new(api.activities.borrow().clone());

        page.apply(ActivitiesAction::OpenEdit(activity("a1", "Soup Kitchen")));
        assert_eq!(page.edit_form.values().name, "Soup Kitchen");
        page.edit_form.update_field("status", ActivityStatus::Ongoing).unwrap();

        let updated = block_on(page.handle_update(&api, &|t| toasts.push(t))).unwrap();

        assert_eq!(updated.status, ActivityStatus::Ongoing);
        assert!(!page.edit_modal.is_open);
        assert_eq!(api.calls.borrow().as_slice(), ["update_activity a1"]);
    }

    #[test]
    fn delete_runs_through_confirmation() {
        let api = Rc::new(FakeApi::new());
        api.activities.borrow_mut().push(activity("a1", "Soup Kitchen"));
        let toasts = Rc::new(ToastLog::default());
        let mut page = ActivitiesPage::new(api.activities.borrow().clone());

        let sink = Rc::clone(&toasts);
        page.request_delete(&activity("a1", "Soup Kitchen"), Rc::clone(&api), Rc::new(move |t: Toast| sink.push(t)));
        assert!(page.confirm.is_open);

        assert!(block_on(page.confirm.handle_confirm()).is_ok());
        assert!(!page.confirm.is_open);
        assert!(api.activities.borrow().is_empty());
        assert_eq!(toasts.titles(), vec!["Activity deleted".to_string()]);
    }

    #[test]
    fn status_and_project_filters_apply() {
        let mut a1 = activity("a1", "Food Drive");
        a1.status = ActivityStatus::Ongoing;
        a1.project_id = Some("p1".into());
        let mut a2 = activity("a2", "Food Bank Shift");
        a2.project_id = Some("p2".into());
        let mut page = ActivitiesPage::new(vec![a1, a2]);

        page.apply(ActivitiesAction::Search(SearchAction::SetSearchTerm("food".into())));
        assert_eq!(page.search.total_items(), 2);

        page.apply(ActivitiesAction::Search(SearchAction::SetCustomFilter(PROJECT_FILTER.into(), "p2".into())));
        assert_eq!(page.search.filtered_data()[0].id, "a2");

        page.apply(ActivitiesAction::Search(SearchAction::SetMainFilter("ongoing".into())));
        assert_eq!(page.search.total_items(), 0);
    }

    #[test]
    fn capacity_zero_is_rejected() {
        let form = ActivityForm { name: "Run".into(), capacity: Some(0), ..Default::default() };
        let errors = validate_activity(&form).unwrap();
        assert!(errors.contains_key("capacity"));
        assert!(!errors.contains_key("name"));
    }

    #[test]
    fn retry_after_duplicate_clears_the_name_error() {
        let api = FakeApi::new();
        api.fail_next(FakeApi::conflict());
        let toasts = ToastLog::default();
        let mut page = page_with_create_open("Food Drive");
        assert!(block_on(page.handle_create(&api, &|t| toasts.push(t))).is_err());
        assert_eq!(page.create_form.error("name"), Some(DUPLICATE_NAME_MESSAGE));

        page.create_form.update_field("location", "Harbour").unwrap();
        let (action, payload) = page.start_create();
        assert!(payload.is_ok());
        page.apply(action);

        assert!(page.create_form.errors().is_empty());
        assert!(page.create_form.is_submitting());
    }

    #[test]
    fn update_without_selection_reports_it() {
        let mut page = ActivitiesPage::default();

        let (action, payload) = page.start_update();
        page.apply(action);

        assert!(payload.is_err());
        assert_eq!(page.edit_form.error("name"), Some("No activity selected"));
        assert!(!page.edit_form.is_submitting());
    }

    #[test]
    fn settle_create_toasts_once_and_settles_the_form() {
        let toasts = ToastLog::default();
        let mut page = page_with_create_open("Food Drive");
        let (action, _) = page.start_create();
        page.apply(action);

        let (action, settled) = ActivitiesPage::settle_create(Err(FakeApi::conflict()), &|t| toasts.push(t));
        page.apply(action);

        assert!(settled.is_err());
        assert!(toasts.is_empty());
        assert!(!page.create_form.is_submitting());
        assert_eq!(page.create_form.error("name"), Some(DUPLICATE_NAME_MESSAGE));

        let (_, settled) = ActivitiesPage::settle_create(Ok(activity("a9", "Food Drive")), &|t| toasts.push(t));
        assert!(settled.is_ok());
        assert_eq!(toasts.titles(), vec!["Activity created".to_string()]);
    }

    #[test]
    fn configured_page_size_reaches_the_engine() {
        let rows = (0..7).map(|i| activity(&format!("a{}", i), "Shift")).collect();
        let page = ActivitiesPage::new(rows).with_items_per_page(5);

        assert_eq!(page.search.total_pages(), 2);
        assert_eq!(page.search.paginated_data().len(), 5);
    }
}
