// ============================================================================
// VOLUNTEERS VIEWMODEL - Volunteers page state and handlers
// ============================================================================

use std::rc::Rc;

use crate::error::{ApiError, AppError};
use crate::models::{Toast, Volunteer, VolunteerForm, VolunteerPayload};
use crate::services::VolunteerApi;
use crate::state::{
    ConfirmDialogAction, ConfirmDialogState, ConfirmRequest, FieldErrors, FormAction, FormState,
    ModalAction, ModalState, SearchAction, SearchFilterState,
};
use crate::utils::constants::MAIN_FILTER;
use crate::utils::validation::{finish, is_valid_email, require};
use crate::viewmodels::outcome;

pub const SEARCH_FIELDS: [&str; 3] = ["name", "email", "skills"];
pub const SKILL_FILTER: &str = "skill";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "A volunteer with this email already exists.";

pub fn validate_volunteer(values: &VolunteerForm) -> Option<FieldErrors> {
    let mut errors = FieldErrors::new();
    require(&mut errors, "name", &values.name, "Name is required");
    require(&mut errors, "email", &values.email, "Email is required");
    if !errors.contains_key("email") && !is_valid_email(&values.email) {
        errors.insert("email".into(), "Enter a valid email address".into());
    }
    let digits = values.phone.chars().filter(char::is_ascii_digit).count();
    if !values.phone.trim().is_empty() && digits < 7 {
        errors.insert("phone".into(), "Enter a valid phone number".into());
    }
    finish(errors)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentChange {
    Assign,
    Unassign,
}

/// Local mirror of what the server does on assign / unassign: exactly that
/// activity id is appended or removed. Assigning twice is a no-op.
pub fn project_assignment(volunteer: &Volunteer, activity_id: &str, change: AssignmentChange) -> Volunteer {
    let mut next = volunteer.clone();
    match change {
        AssignmentChange::Assign => {
            if !next.activity_ids.iter().any(|id| id == activity_id) {
                next.activity_ids.push(activity_id.to_string());
            }
        }
        AssignmentChange::Unassign => next.activity_ids.retain(|id| id != activity_id),
    }
    next
}

#[derive(Clone)]
pub struct VolunteersPage {
    pub search: SearchFilterState<Volunteer>,
    pub create_modal: ModalState<()>,
    pub edit_modal: ModalState<Volunteer>,
    pub view_modal: ModalState<Volunteer>,
    pub assign_modal: ModalState<Volunteer>,
    pub create_form: FormState<VolunteerForm>,
    pub edit_form: FormState<VolunteerForm>,
    pub confirm: ConfirmDialogState,
}

pub enum VolunteersAction {
    Search(SearchAction<Volunteer>),
    CreateModal(ModalAction<()>),
    EditModal(ModalAction<Volunteer>),
    ViewModal(ModalAction<Volunteer>),
    AssignModal(ModalAction<Volunteer>),
    CreateForm(FormAction<VolunteerForm>),
    EditForm(FormAction<VolunteerForm>),
    Confirm(ConfirmDialogAction),
    OpenCreate,
    OpenEdit(Volunteer),
    CreateSettled(Result<Volunteer, ApiError>),
    UpdateSettled(Result<Volunteer, ApiError>),
    /// A successful assign / unassign on the volunteer shown in the
    /// assignment modal.
    Assigned(String, AssignmentChange),
}

impl Default for VolunteersPage {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl VolunteersPage {
    pub fn new(volunteers: Vec<Volunteer>) -> Self {
        let search = SearchFilterState::new(volunteers, &SEARCH_FIELDS)
            .register_filter(MAIN_FILTER, |v: &Volunteer, status| v.status.as_str() == status)
            .register_filter(SKILL_FILTER, |v: &Volunteer, skill| {
                v.skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
            });

        Self {
            search,
            create_modal: ModalState::new(),
            edit_modal: ModalState::new(),
            view_modal: ModalState::new(),
            assign_modal: ModalState::new(),
            create_form: FormState::with_validator(VolunteerForm::default(), validate_volunteer),
            edit_form: FormState::with_validator(VolunteerForm::default(), validate_volunteer),
            confirm: ConfirmDialogState::new(),
        }
    }

    pub fn apply(&mut self, action: VolunteersAction) {
        match action {
            VolunteersAction::Search(action) => self.search.apply(action),
            VolunteersAction::CreateModal(action) => self.create_modal.apply(action),
            VolunteersAction::EditModal(action) => self.edit_modal.apply(action),
            VolunteersAction::ViewModal(action) => self.view_modal.apply(action),
            VolunteersAction::AssignModal(action) => self.assign_modal.apply(action),
            VolunteersAction::CreateForm(action) => self.create_form.apply(action),
            VolunteersAction::EditForm(action) => self.edit_form.apply(action),
            VolunteersAction::Confirm(action) => self.confirm.apply(action),
            VolunteersAction::OpenCreate => {
                self.create_form.reset_form();
                self.create_modal.open_modal(None);
            }
            VolunteersAction::OpenEdit(volunteer) => {
                self.edit_form.load(VolunteerForm::from(&volunteer));
                self.edit_modal.open_modal(Some(volunteer));
            }
            VolunteersAction::CreateSettled(result) => {
                self.create_form.finish_submit();
                match result {
                    Ok(_) => {
                        self.create_form.reset_form();
                        self.create_modal.close_modal();
                    }
                    Err(e) if e.is_conflict() => {
                        self.create_form.set_field_error("email", DUPLICATE_EMAIL_MESSAGE);
                    }
                    Err(_) => {}
                }
            }
            VolunteersAction::UpdateSettled(result) => {
                self.edit_form.finish_submit();
                match result {
                    Ok(_) => self.edit_modal.close_modal(),
                    Err(e) if e.is_conflict() => {
                        self.edit_form.set_field_error("email", DUPLICATE_EMAIL_MESSAGE);
                    }
                    Err(_) => {}
                }
            }
            VolunteersAction::Assigned(activity_id, change) => {
                if let Some(current) = self.assign_modal.data.as_ref() {
                    let next = project_assignment(current, &activity_id, change);
                    self.assign_modal.data = Some(next);
                }
            }
        }
    }

    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.search = self.search.with_items_per_page(items_per_page);
        self
    }

    /// Validation verdict for the create form and the action recording it.
    pub fn start_create(&self) -> (VolunteersAction, Result<VolunteerPayload, FieldErrors>) {
        let (action, values) = self.create_form.submit_step();
        (VolunteersAction::CreateForm(action), values.map(VolunteerPayload::from))
    }

    pub fn start_update(&self) -> (VolunteersAction, Result<(String, VolunteerPayload), FieldErrors>) {
        let Some(id) = self.edit_modal.data.as_ref().map(|v| v.id.clone()) else {
            let errors = FieldErrors::from([("name".to_string(), "No volunteer selected".to_string())]);
            return (VolunteersAction::EditForm(FormAction::Rejected(errors.clone())), Err(errors));
        };
        let (action, values) = self.edit_form.submit_step();
        (VolunteersAction::EditForm(action), values.map(|values| (id, values.into())))
    }

    pub fn begin_create(&mut self) -> Result<VolunteerPayload, FieldErrors> {
        let (action, payload) = self.start_create();
        self.apply(action);
        payload
    }

    pub fn begin_update(&mut self) -> Result<(String, VolunteerPayload), FieldErrors> {
        let (action, payload) = self.start_update();
        self.apply(action);
        payload
    }

    /// Id of the volunteer in the assignment modal, if one is shown.
    pub fn assignment_target(&self) -> Option<String> {
        let id = self.assign_modal.payload().map(|v| v.id.clone());
        if id.is_none() {
            log::warn!("⚠️ Assignment change with no volunteer selected");
        }
        id
    }

    pub fn settle_create(
        result: Result<Volunteer, ApiError>,
        notify: &dyn Fn(Toast),
    ) -> (VolunteersAction, Result<Volunteer, AppError>) {
        if let Some(toast) = outcome::volunteer_created(&result) {
            notify(toast);
        }
        let settled = result.clone().map_err(AppError::from);
        (VolunteersAction::CreateSettled(result), settled)
    }

    pub fn settle_update(
        result: Result<Volunteer, ApiError>,
        notify: &dyn Fn(Toast),
    ) -> (VolunteersAction, Result<Volunteer, AppError>) {
        if let Some(toast) = outcome::volunteer_updated(&result) {
            notify(toast);
        }
        let settled = result.clone().map_err(AppError::from);
        (VolunteersAction::UpdateSettled(result), settled)
    }

    pub fn settle_status(result: Result<Volunteer, ApiError>, notify: &dyn Fn(Toast)) -> Result<Volunteer, AppError> {
        notify(outcome::volunteer_status_changed(&result));
        result.map_err(AppError::from)
    }

    /// Toast for an assign / unassign; on success also the action that
    /// projects it onto the modal payload.
    pub fn settle_assignment(
        activity_id: String,
        change: AssignmentChange,
        result: Result<(), ApiError>,
        notify: &dyn Fn(Toast),
    ) -> (Option<VolunteersAction>, Result<(), AppError>) {
        notify(match change {
            AssignmentChange::Assign => outcome::activity_assigned(&result),
            AssignmentChange::Unassign => outcome::activity_unassigned(&result),
        });
        match result {
            Ok(()) => (Some(VolunteersAction::Assigned(activity_id, change)), Ok(())),
            Err(e) => (None, Err(e.into())),
        }
    }

    pub async fn refresh<A: VolunteerApi + ?Sized>(&mut self, api: &A) {
        match api.list_volunteers().await {
            Ok(rows) => self.search.set_data(rows),
            Err(e) => log::error!("❌ Reloading volunteers failed: {}", e),
        }
    }

    pub async fn handle_create<A: VolunteerApi + ?Sized>(
        &mut self,
        api: &A,
        notify: &dyn Fn(Toast),
    ) -> Result<Volunteer, AppError> {
        let payload = self.begin_create().map_err(AppError::Validation)?;
        log::info!("👤 Creating volunteer {}", payload.email);
        let result = api.create_volunteer(payload).await;
        let (action, settled) = Self::settle_create(result, notify);
        self.apply(action);
        if settled.is_ok() {
            self.refresh(api).await;
        }
        settled
    }

    pub async fn handle_update<A: VolunteerApi + ?Sized>(
        &mut self,
        api: &A,
        notify: &dyn Fn(Toast),
    ) -> Result<Volunteer, AppError> {
        let (id, payload) = self.begin_update().map_err(AppError::Validation)?;
        let result = api.update_volunteer(&id, payload).await;
        let (action, settled) = Self::settle_update(result, notify);
        self.apply(action);
        if settled.is_ok() {
            self.refresh(api).await;
        }
        settled
    }

    pub async fn handle_toggle_status<A: VolunteerApi + ?Sized>(
        &mut self,
        api: &A,
        volunteer: &Volunteer,
        notify: &dyn Fn(Toast),
    ) -> Result<Volunteer, AppError> {
        let result = api.set_volunteer_status(&volunteer.id, volunteer.status.toggled()).await;
        let settled = Self::settle_status(result, notify);
        if settled.is_ok() {
            self.refresh(api).await;
        }
        settled
    }

    /// Assigns or unassigns `activity_id` for the volunteer in the
    /// assignment modal. On success the modal payload is projected locally
    /// and the list refetched.
    pub async fn handle_assignment<A: VolunteerApi + ?Sized>(
        &mut self,
        api: &A,
        activity_id: &str,
        change: AssignmentChange,
        notify: &dyn Fn(Toast),
    ) -> Result<(), AppError> {
        let Some(volunteer_id) = self.assignment_target() else {
            return Ok(());
        };

        let result = match change {
            AssignmentChange::Assign => api.assign_activity(&volunteer_id, activity_id).await,
            AssignmentChange::Unassign => api.unassign_activity(&volunteer_id, activity_id).await,
        };
        let (action, settled) = Self::settle_assignment(activity_id.to_string(), change, result, notify);
        if let Some(action) = action {
            self.apply(action);
            self.refresh(api).await;
        }
        settled
    }

    pub fn delete_request<F, Fut>(volunteer: &Volunteer, on_confirm: F) -> ConfirmRequest
    where
        F: Fn() -> Fut + 'static,
        Fut: std::future::Future<Output = Result<(), AppError>> + 'static,
    {
        ConfirmRequest::new(
            "Delete volunteer",
            format!("{} and their logged hours will be removed. This cannot be undone.", volunteer.name),
            on_confirm,
        )
        .confirm_text("Delete")
        .destructive()
    }

    pub fn request_delete<A: VolunteerApi + 'static>(
        &mut self,
        volunteer: &Volunteer,
        api: Rc<A>,
        notify: Rc<dyn Fn(Toast)>,
    ) {
        let id = volunteer.id.clone();
        let request = Self::delete_request(volunteer, move || {
            let api = Rc::clone(&api);
            let notify = Rc::clone(&notify);
            let id = id.clone();
            async move {
                let result = api.delete_volunteer(&id).await;
                notify(outcome::volunteer_deleted(&result));
                result.map_err(AppError::from)
            }
        });
        self.confirm.show_dialog(request);
    }
}
