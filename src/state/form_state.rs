// ============================================================================
// FORM STATE - Values, per-field errors and submission flag for one form
// ============================================================================
// Fields are addressed by name through the serde representation of `T`, so
// any `#[derive(Serialize, Deserialize)]` record works as form values.
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Field name → message. Only invalid fields are present.
pub type FieldErrors = BTreeMap<String, String>;

/// Pure validator: `None` when the values are valid.
pub type Validator<T> = Rc<dyn Fn(&T) -> Option<FieldErrors>>;

/// Bounds every form value record satisfies.
pub trait FormValues: Clone + PartialEq + Serialize + DeserializeOwned + 'static {}

impl<T> FormValues for T where T: Clone + PartialEq + Serialize + DeserializeOwned + 'static {}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Invalid value for field `{field}`: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Form values must serialize to an object")]
    NotAnObject,
}

#[derive(Debug, Error)]
pub enum SubmitError<E> {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),

    #[error("Submission failed: {0}")]
    Failed(E),
}

pub struct FormState<T> {
    values: T,
    initial: T,
    errors: FieldErrors,
    is_submitting: bool,
    validator: Option<Validator<T>>,
}

/// Transitions applied by [`FormState::apply`], also the reducer actions of
/// `use_form_data`.
pub enum FormAction<T> {
    UpdateField(String, Value),
    UpdateFormData(Map<String, Value>),
    Load(T),
    Reset,
    SetFieldError(String, String),
    Validate,
    /// Replaces `errors` with a failed verdict computed elsewhere.
    Rejected(FieldErrors),
    /// The values passed validation: errors are cleared and the flag raised.
    SubmitStarted,
    SubmitFinished,
}

/// Lowers `is_submitting` when dropped, so an abandoned submission does not
/// leave the form locked.
struct Submitting<'a, T: FormValues>(&'a mut FormState<T>);

impl<T: FormValues> Drop for Submitting<'_, T> {
    fn drop(&mut self) {
        self.0.finish_submit();
    }
}

impl<T: FormValues> FormState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FieldErrors::new(),
            is_submitting: false,
            validator: None,
        }
    }

    pub fn with_validator<F>(initial: T, validator: F) -> Self
    where
        F: Fn(&T) -> Option<FieldErrors> + 'static,
    {
        let mut form = Self::new(initial);
        form.validator = Some(Rc::new(validator));
        form
    }

    /// Swaps the validator, e.g. once the lookups it checks against arrive.
    pub fn set_validator<F>(&mut self, validator: F)
    where
        F: Fn(&T) -> Option<FieldErrors> + 'static,
    {
        self.validator = Some(Rc::new(validator));
    }

    pub fn values(&self) -> &T {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Sets one field and drops the error recorded for it, if any.
    pub fn update_field<V: Serialize>(&mut self, field: &str, value: V) -> Result<(), FormError> {
        let value = serde_json::to_value(value).map_err(|e| FormError::InvalidField {
            field: field.to_string(),
            reason: e.to_string(),
        })?;
        let mut patch = Map::new();
        patch.insert(field.to_string(), value);
        self.values = merge(&self.values, patch)?;
        self.errors.remove(field);
        Ok(())
    }

    /// Merges several fields at once. Errors are left untouched.
    pub fn update_form_data(&mut self, partial: Map<String, Value>) -> Result<(), FormError> {
        self.values = merge(&self.values, partial)?;
        Ok(())
    }

    /// Replaces every value (e.g. the record opened for editing) and clears
    /// errors. The reset snapshot is not affected.
    pub fn load(&mut self, values: T) {
        self.values = values;
        self.errors.clear();
    }

    pub fn reset_form(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
    }

    pub fn set_field_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }

    /// Runs the validator and replaces `errors` wholesale with its result.
    pub fn validate_form(&mut self) -> bool {
        match self.validator.as_ref().and_then(|validate| validate(&self.values)) {
            Some(errors) => {
                self.errors = errors;
                false
            }
            None => {
                self.errors.clear();
                true
            }
        }
    }

    /// Validator verdict on the current values, without touching state.
    pub fn validated_values(&self) -> Result<T, FieldErrors> {
        match self.validator.as_ref().and_then(|validate| validate(&self.values)) {
            Some(errors) => Err(errors),
            None => Ok(self.values.clone()),
        }
    }

    /// Validation verdict paired with the action that records it. Reducer
    /// callers dispatch the action and send the values only on `Ok`.
    pub fn submit_step(&self) -> (FormAction<T>, Result<T, FieldErrors>) {
        match self.validated_values() {
            Ok(values) => (FormAction::SubmitStarted, Ok(values)),
            Err(errors) => (FormAction::Rejected(errors.clone()), Err(errors)),
        }
    }

    /// First half of a submission: validates and raises `is_submitting`.
    /// Returns the values to send, or the validation errors.
    pub fn begin_submit(&mut self) -> Result<T, FieldErrors> {
        let (action, values) = self.submit_step();
        self.apply(action);
        values
    }

    pub fn finish_submit(&mut self) {
        self.is_submitting = false;
    }

    /// Validates, awaits `on_submit` and always lowers `is_submitting`
    /// afterwards. A failing callback is logged and reported through the
    /// returned error, never propagated any other way.
    pub async fn handle_submit<F, Fut, E>(&mut self, on_submit: F) -> Result<(), SubmitError<E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: fmt::Display,
    {
        let values = self.begin_submit().map_err(SubmitError::Invalid)?;
        let submitting = Submitting(self);
        let outcome = on_submit(values).await;
        drop(submitting);

        outcome.map_err(|e| {
            log::error!("❌ Form submission failed: {}", e);
            SubmitError::Failed(e)
        })
    }

    pub fn apply(&mut self, action: FormAction<T>) {
        match action {
            FormAction::UpdateField(field, value) => {
                if let Err(e) = self.update_field(&field, value) {
                    log::warn!("⚠️ {}", e);
                }
            }
            FormAction::UpdateFormData(partial) => {
                if let Err(e) = self.update_form_data(partial) {
                    log::warn!("⚠️ {}", e);
                }
            }
            FormAction::Load(values) => self.load(values),
            FormAction::Reset => self.reset_form(),
            FormAction::SetFieldError(field, message) => self.set_field_error(&field, message),
            FormAction::Validate => {
                self.validate_form();
            }
            FormAction::Rejected(errors) => self.errors = errors,
            FormAction::SubmitStarted => {
                self.errors.clear();
                self.is_submitting = true;
            }
            FormAction::SubmitFinished => self.finish_submit(),
        }
    }
}

fn merge<T: FormValues>(values: &T, patch: Map<String, Value>) -> Result<T, FormError> {
    let mut current = serde_json::to_value(values).map_err(|_| FormError::NotAnObject)?;
    let object = current.as_object_mut().ok_or(FormError::NotAnObject)?;

    let mut touched = Vec::with_capacity(patch.len());
    for (field, value) in patch {
        if !object.contains_key(&field) {
            return Err(FormError::InvalidField {
                field,
                reason: "no such field".to_string(),
            });
        }
        object.insert(field.clone(), value);
        touched.push(field);
    }

    serde_json::from_value(current).map_err(|e| FormError::InvalidField {
        field: touched.join(", "),
        reason: e.to_string(),
    })
}

impl<T: Clone> Clone for FormState<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            initial: self.initial.clone(),
            errors: self.errors.clone(),
            is_submitting: self.is_submitting,
            validator: self.validator.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for FormState<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
            && self.errors == other.errors
            && self.is_submitting == other.is_submitting
    }
}

impl<T: fmt::Debug> fmt::Debug for FormState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("is_submitting", &self.is_submitting)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, FutureExt};
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct SignupForm {
        name: String,
        hours: f64,
        skills: Vec<String>,
    }

    fn validator(values: &SignupForm) -> Option<FieldErrors> {
        let mut errors = FieldErrors::new();
        if values.name.trim().is_empty() {
            errors.insert("name".into(), "Name is required".into());
        }
        if values.hours <= 0.0 {
            errors.insert("hours".into(), "Hours must be positive".into());
        }
        (!errors.is_empty()).then_some(errors)
    }

    fn valid_form() -> FormState<SignupForm> {
        let mut form = FormState::with_validator(SignupForm::default(), validator);
        form.update_field("name", "Ana").unwrap();
        form.update_field("hours", 2.5).unwrap();
        form
    }

    #[test]
    fn update_field_clears_its_own_error() {
        let mut form = FormState::new(SignupForm::default());
        form.set_field_error("name", "Duplicate name");
        form.set_field_error("hours", "Too many");

        form.update_field("name", "Food Drive").unwrap();

        assert_eq!(form.error("name"), None);
        assert_eq!(form.error("hours"), Some("Too many"));
        assert_eq!(form.values().name, "Food Drive");
    }

    #[test]
    fn update_field_rejects_unknown_and_mistyped_fields() {
        let mut form = FormState::new(SignupForm::default());

        assert!(matches!(
            form.update_field("nickname", "x"),
            Err(FormError::InvalidField { .. })
        ));
        assert!(form.update_field("hours", "not a number").is_err());
        assert_eq!(form.values(), &SignupForm::default());
    }

    #[test]
    fn update_form_data_keeps_errors() {
        let mut form = FormState::new(SignupForm::default());
        form.set_field_error("name", "Required");

        let mut partial = Map::new();
        partial.insert("name".into(), Value::from("Carlos"));
        partial.insert("skills".into(), serde_json::json!(["first aid"]));
        form.update_form_data(partial).unwrap();

        assert_eq!(form.values().skills, vec!["first aid".to_string()]);
        assert_eq!(form.error("name"), Some("Required"));
    }

    #[test]
    fn reset_restores_initial_snapshot() {
        let initial = SignupForm { name: "Seed".into(), hours: 1.0, skills: vec!["cooking".into()] };
        let mut form = FormState::new(initial.clone());
        form.update_field("name", "Changed").unwrap();
        form.update_field("skills", vec!["driving"]).unwrap();
        form.load(SignupForm::default());
        form.set_field_error("hours", "bad");

        form.reset_form();

        assert_eq!(form.values(), &initial);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn validate_is_idempotent_and_replaces_errors() {
        let mut form = FormState::with_validator(SignupForm::default(), validator);
        form.set_field_error("skills", "stale");

        let first = form.validate_form();
        let first_errors = form.errors().clone();
        let second = form.validate_form();

        assert!(!first);
        assert_eq!(first, second);
        assert_eq!(&first_errors, form.errors());
        assert!(form.error("skills").is_none());
        assert!(form.error("name").is_some());
    }

    #[test]
    fn handle_submit_success_clears_flag() {
        let mut form = valid_form();
        let result = block_on(form.handle_submit(|values| async move {
            assert_eq!(values.name, "Ana");
            Ok::<(), String>(())
        }));

        assert!(result.is_ok());
        assert!(!form.is_submitting());
    }

    #[test]
    fn handle_submit_failure_clears_flag_and_reports() {
        let mut form = valid_form();
        let result = block_on(form.handle_submit(|_| async { Err::<(), _>("boom".to_string()) }));

        assert!(matches!(result, Err(SubmitError::Failed(ref e)) if e == "boom"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn handle_submit_skips_callback_when_invalid() {
        let mut form = FormState::with_validator(SignupForm::default(), validator);
        let mut called = false;
        let result = block_on(form.handle_submit(|_| {
            called = true;
            async { Ok::<(), String>(()) }
        }));

        assert!(matches!(result, Err(SubmitError::Invalid(ref errors)) if errors.len() == 2));
        assert!(!called);
        assert!(!form.is_submitting());
    }

    #[test]
    fn validated_values_leaves_state_alone() {
        let form = FormState::with_validator(SignupForm::default(), validator);
        assert!(form.validated_values().is_err());
        assert!(form.errors().is_empty());
        assert_eq!(valid_form().validated_values().unwrap().name, "Ana");
    }

    #[test]
    fn begin_submit_raises_flag_until_finished() {
        let mut form = valid_form();
        assert!(form.begin_submit().is_ok());
        assert!(form.is_submitting());
        form.apply(FormAction::SubmitFinished);
        assert!(!form.is_submitting());
    }

    #[test]
    fn passing_submission_drops_stale_server_errors() {
        let mut form = valid_form();
        form.set_field_error("name", "A volunteer with this name already exists");
        form.update_field("skills", vec!["cooking"]).unwrap();

        let (action, values) = form.submit_step();
        assert!(values.is_ok());
        form.apply(action);

        assert!(form.errors().is_empty());
        assert!(form.is_submitting());
    }

    #[test]
    fn failed_step_replaces_errors_without_raising_flag() {
        let mut form = FormState::with_validator(SignupForm::default(), validator);
        form.set_field_error("skills", "stale");

        let (action, values) = form.submit_step();
        form.apply(action);

        assert_eq!(values.unwrap_err().len(), 2);
        assert!(form.error("skills").is_none());
        assert_eq!(form.error("name"), Some("Name is required"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn dropped_submission_releases_flag() {
        let mut form = valid_form();
        let submit = form.handle_submit(|_| pending::<Result<(), String>>());
        assert!(submit.now_or_never().is_none());

        assert!(!form.is_submitting());
    }
}
