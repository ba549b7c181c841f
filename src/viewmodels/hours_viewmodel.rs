// ============================================================================
// HOURS VIEWMODEL - Work-log review and logging
// ============================================================================
// The log-hours form is validated against the project list, which arrives
// after the page is built: `set_projects` swaps the validator once it does.
// ============================================================================

use std::rc::Rc;

use crate::error::{ApiError, AppError};
use crate::models::{Project, Toast, WorkLog, WorkLogForm, WorkLogPayload, WorkLogStatus};
use crate::services::WorkLogApi;
use crate::state::{
    ConfirmDialogAction, ConfirmDialogState, ConfirmRequest, FieldErrors, FormAction, FormState,
    ModalAction, ModalState, SearchAction, SearchFilterState,
};
use crate::utils::constants::{MAIN_FILTER, MAX_HOURS_PER_LOG};
use crate::utils::validation::{finish, require};
use crate::viewmodels::outcome;

pub const SEARCH_FIELDS: [&str; 3] = ["volunteer_name", "activity_name", "description"];
pub const DATE_BEFORE_PROJECT_START: &str = "Date cannot precede project start date";

pub fn validate_work_log(values: &WorkLogForm, projects: &[Project]) -> Option<FieldErrors> {
    let mut errors = FieldErrors::new();
    require(&mut errors, "volunteer_id", &values.volunteer_id, "Select a volunteer");
    require(&mut errors, "project_id", &values.project_id, "Select a project");

    match values.date {
        None => {
            errors.insert("date".into(), "Date is required".into());
        }
        Some(date) => {
            let start = projects
                .iter()
                .find(|p| p.id == values.project_id)
                .and_then(|p| p.start_date);
            if matches!(start, Some(start) if date < start) {
                errors.insert("date".into(), DATE_BEFORE_PROJECT_START.into());
            }
        }
    }

    if values.hours.is_nan() || values.hours <= 0.0 {
        errors.insert("hours".into(), "Hours must be greater than 0".into());
    } else if values.hours > MAX_HOURS_PER_LOG {
        errors.insert("hours".into(), format!("Hours cannot exceed {}", MAX_HOURS_PER_LOG));
    }
    finish(errors)
}

fn log_payload(values: WorkLogForm) -> Result<WorkLogPayload, FieldErrors> {
    let date = values
        .date
        .ok_or_else(|| FieldErrors::from([("date".to_string(), "Date is required".to_string())]))?;
    Ok(WorkLogPayload {
        volunteer_id: values.volunteer_id,
        project_id: values.project_id,
        activity_id: values.activity_id.filter(|id| !id.is_empty()),
        date,
        hours: values.hours,
        description: values.description.trim().to_string(),
    })
}

#[derive(Clone)]
pub struct HoursPage {
    pub search: SearchFilterState<WorkLog>,
    pub log_modal: ModalState<()>,
    pub view_modal: ModalState<WorkLog>,
    pub log_form: FormState<WorkLogForm>,
    pub confirm: ConfirmDialogState,
    pub projects: Rc<Vec<Project>>,
}

pub enum HoursAction {
    Search(SearchAction<WorkLog>),
    LogModal(ModalAction<()>),
    ViewModal(ModalAction<WorkLog>),
    LogForm(FormAction<WorkLogForm>),
    Confirm(ConfirmDialogAction),
    ProjectsLoaded(Vec<Project>),
    OpenLog,
    LogSettled(Result<WorkLog, ApiError>),
}

impl Default for HoursPage {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl HoursPage {
    pub fn new(work_logs: Vec<WorkLog>) -> Self {
        let search = SearchFilterState::new(work_logs, &SEARCH_FIELDS)
            .register_filter(MAIN_FILTER, |w: &WorkLog, status| w.status.as_str() == status);

        let mut page = Self {
            search,
            log_modal: ModalState::new(),
            view_modal: ModalState::new(),
            log_form: FormState::new(WorkLogForm::default()),
            confirm: ConfirmDialogState::new(),
            projects: Rc::new(Vec::new()),
        };
        page.set_projects(Vec::new());
        page
    }

    pub fn set_projects(&mut self, projects: Vec<Project>) {
        let projects = Rc::new(projects);
        self.projects = Rc::clone(&projects);
        self.log_form
            .set_validator(move |values: &WorkLogForm| validate_work_log(values, &projects));
    }

    pub fn apply(&mut self, action: HoursAction) {
        match action {
            HoursAction::Search(action) => self.search.apply(action),
            HoursAction::LogModal(action) => self.log_modal.apply(action),
            HoursAction::ViewModal(action) => self.view_modal.apply(action),
            HoursAction::LogForm(action) => self.log_form.apply(action),
            HoursAction::Confirm(action) => self.confirm.apply(action),
            HoursAction::ProjectsLoaded(projects) => self.set_projects(projects),
            HoursAction::OpenLog => {
                self.log_form.reset_form();
                self.log_modal.open_modal(None);
            }
            HoursAction::LogSettled(result) => {
                self.log_form.finish_submit();
                if result.is_ok() {
                    self.log_form.reset_form();
                    self.log_modal.close_modal();
                }
            }
        }
    }

    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.search = self.search.with_items_per_page(items_per_page);
        self
    }

    /// Validation verdict for the log form, as a payload, and the action
    /// recording it.
    pub fn start_log(&self) -> (HoursAction, Result<WorkLogPayload, FieldErrors>) {
        let (action, values) = self.log_form.submit_step();
        match values.and_then(log_payload) {
            Ok(payload) => (HoursAction::LogForm(action), Ok(payload)),
            Err(errors) => (HoursAction::LogForm(FormAction::Rejected(errors.clone())), Err(errors)),
        }
    }

    /// Validates the log form and raises its submitting flag.
    pub fn begin_log(&mut self) -> Result<WorkLogPayload, FieldErrors> {
        let (action, payload) = self.start_log();
        self.apply(action);
        payload
    }

    pub fn settle_log(
        result: Result<WorkLog, ApiError>,
        notify: &dyn Fn(Toast),
    ) -> (HoursAction, Result<WorkLog, AppError>) {
        notify(outcome::hours_logged(&result));
        let settled = result.clone().map_err(AppError::from);
        (HoursAction::LogSettled(result), settled)
    }

    pub fn settle_review(result: Result<WorkLog, ApiError>, notify: &dyn Fn(Toast)) -> Result<WorkLog, AppError> {
        notify(outcome::work_log_reviewed(&result));
        result.map_err(AppError::from)
    }

    pub async fn refresh<A: WorkLogApi + ?Sized>(&mut self, api: &A) {
        match api.list_work_logs().await {
            Ok(rows) => self.search.set_data(rows),
            Err(e) => log::error!("❌ Reloading work logs failed: {}", e),
        }
    }

    pub async fn handle_log<A: WorkLogApi + ?Sized>(
        &mut self,
        api: &A,
        notify: &dyn Fn(Toast),
    ) -> Result<WorkLog, AppError> {
        let payload = self.begin_log().map_err(AppError::Validation)?;
        log::info!("⏱️ Logging {} h for {}", payload.hours, payload.volunteer_id);
        let result = api.create_work_log(payload).await;
        let (action, settled) = Self::settle_log(result, notify);
        self.apply(action);
        if settled.is_ok() {
            self.refresh(api).await;
        }
        settled
    }

    /// Approve or reject a pending log.
    pub async fn handle_review<A: WorkLogApi + ?Sized>(
        &mut self,
        api: &A,
        id: &str,
        status: WorkLogStatus,
        notify: &dyn Fn(Toast),
    ) -> Result<WorkLog, AppError> {
        let result = api.set_work_log_status(id, status).await;
        let settled = Self::settle_review(result, notify);
        if settled.is_ok() {
            self.refresh(api).await;
        }
        settled
    }

    pub fn delete_request<F, Fut>(work_log: &WorkLog, on_confirm: F) -> ConfirmRequest
    where
        F: Fn() -> Fut + 'static,
        Fut: std::future::Future<Output = Result<(), AppError>> + 'static,
    {
        ConfirmRequest::new(
            "Delete work log",
            format!("{} h logged by {} on {} will be removed.", work_log.hours, work_log.volunteer_name, work_log.date),
            on_confirm,
        )
        .confirm_text("Delete")
        .destructive()
    }

    pub fn request_delete<A: WorkLogApi + 'static>(
        &mut self,
        work_log: &WorkLog,
        api: Rc<A>,
        notify: Rc<dyn Fn(Toast)>,
    ) {
        let id = work_log.id.clone();
        let request = Self::delete_request(work_log, move || {
            let api = Rc::clone(&api);
            let notify = Rc::clone(&notify);
            let id = id.clone();
            async move {
                let result = api.delete_work_log(&id).await;
                notify(outcome::work_log_deleted(&result));
                result.map_err(AppError::from)
            }
        });
        self.confirm.show_dialog(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodels::test_support::{date, project, work_log, FakeApi, ToastLog};
    use futures::executor::block_on;

    fn filled_form(hours: f64, day: u32) -> WorkLogForm {
        WorkLogForm {
            volunteer_id: "v1".into(),
            project_id: "p1".into(),
            activity_id: None,
            date: Some(date(2024, 3, day)),
            hours,
            description: " sorting donations ".into(),
        }
    }

    #[test]
    fn date_before_project_start_is_rejected() {
        let projects = vec![project("p1", Some(date(2024, 3, 10)))];

        let errors = validate_work_log(&filled_form(3.0, 9), &projects).unwrap();
        assert_eq!(errors.get("date").map(String::as_str), Some(DATE_BEFORE_PROJECT_START));

        assert!(validate_work_log(&filled_form(3.0, 10), &projects).is_none());
    }

    #[test]
    fn project_without_start_date_accepts_any_date() {
        let projects = vec![project("p1", None)];
        assert!(validate_work_log(&filled_form(3.0, 1), &projects).is_none());
    }

    #[test]
    fn hours_must_be_positive_and_at_most_a_day() {
        let projects = vec![project("p1", None)];
        for bad in [0.0, -1.0, 24.5, f64::NAN] {
            let errors = validate_work_log(&filled_form(bad, 12), &projects).unwrap();
            assert!(errors.contains_key("hours"), "{} should be rejected", bad);
        }
        assert!(validate_work_log(&filled_form(24.0, 12), &projects).is_none());
    }

    #[test]
    fn validator_follows_loaded_projects() {
        let mut page = HoursPage::default();
        page.log_form.load(filled_form(2.0, 1));
        assert!(page.log_form.validate_form());

        page.apply(HoursAction::ProjectsLoaded(vec![project("p1", Some(date(2024, 3, 5)))]));
        assert!(!page.log_form.validate_form());
        assert_eq!(page.log_form.error("date"), Some(DATE_BEFORE_PROJECT_START));
    }

    #[test]
    fn logging_hours_closes_modal_and_refetches() {
        let api = FakeApi::new();
        let toasts = ToastLog::default();
        let mut page = HoursPage::default();
        page.apply(HoursAction::OpenLog);
        page.log_form.load(filled_form(4.0, 12));

        let created = block_on(page.handle_log(&api, &|t| toasts.push(t))).unwrap();

        assert_eq!(created.description, "sorting donations");
        assert!(!page.log_modal.is_open);
        assert_eq!(page.search.total_items(), 1);
        assert_eq!(toasts.titles(), vec!["Hours logged".to_string()]);
    }

    #[test]
    fn review_changes_status_and_filters() {
        let api = FakeApi::new();
        api.work_logs.borrow_mut().push(work_log("w1", "Ana", WorkLogStatus::Pending));
        api.work_logs.borrow_mut().push(work_log("w2", "Luis", WorkLogStatus::Pending));
        let toasts = ToastLog::default();
        let mut page = HoursPage::new(api.work_logs.borrow().clone());
        page.apply(HoursAction::Search(SearchAction::SetMainFilter("pending".into())));
        assert_eq!(page.search.total_items(), 2);

        block_on(page.handle_review(&api, "w1", WorkLogStatus::Approved, &|t| toasts.push(t))).unwrap();

        assert_eq!(page.search.total_items(), 1);
        assert_eq!(toasts.titles(), vec!["Hours approved".to_string()]);
    }

    #[test]
    fn failed_delete_still_closes_dialog() {
        let api = Rc::new(FakeApi::new());
        api.fail_next(FakeApi::server_error());
        let toasts = Rc::new(ToastLog::default());
        let mut page = HoursPage::default();
        let sink = Rc::clone(&toasts);

        page.request_delete(&work_log("w1", "Ana", WorkLogStatus::Pending), Rc::clone(&api), Rc::new(move |t: Toast| sink.push(t)));
        assert!(block_on(page.confirm.handle_confirm()).is_err());

        assert!(!page.confirm.is_open);
        assert_eq!(toasts.0.borrow()[0].description, "Failed to delete work log. Please try again.");
    }

    #[test]
    fn passing_log_clears_errors_left_from_before() {
        let mut page = HoursPage::default();
        page.apply(HoursAction::OpenLog);
        page.log_form.load(filled_form(4.0, 12));
        page.log_form.set_field_error("description", "Rejected by server");

        let payload = page.begin_log().unwrap();

        assert_eq!(payload.description, "sorting donations");
        assert!(page.log_form.errors().is_empty());
        assert!(page.log_form.is_submitting());
    }

    #[test]
    fn failed_log_keeps_form_open_and_unlocked() {
        let toasts = ToastLog::default();
        let mut page = HoursPage::default();
        page.apply(HoursAction::OpenLog);
        page.log_form.load(filled_form(4.0, 12));
        assert!(page.begin_log().is_ok());

        let (action, settled) = HoursPage::settle_log(Err(FakeApi::server_error()), &|t| toasts.push(t));
        page.apply(action);

        assert!(settled.is_err());
        assert!(page.log_modal.is_open);
        assert!(!page.log_form.is_submitting());
        assert_eq!(toasts.0.borrow()[0].description, "Failed to log hours. Please try again.");
    }
}
