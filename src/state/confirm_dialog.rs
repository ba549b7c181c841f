// ============================================================================
// CONFIRM DIALOG - Pending "are you sure?" request and its async action
// ============================================================================

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::error::AppError;

pub type ConfirmCallback = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<(), AppError>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub description: String,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub variant: DialogVariant,
    pub on_confirm: ConfirmCallback,
}

impl ConfirmRequest {
    pub fn new<F, Fut>(title: impl Into<String>, description: impl Into<String>, on_confirm: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<(), AppError>> + 'static,
    {
        Self {
            title: title.into(),
            description: description.into(),
            confirm_text: None,
            cancel_text: None,
            variant: DialogVariant::Default,
            on_confirm: Rc::new(move || on_confirm().boxed_local()),
        }
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    pub fn destructive(mut self) -> Self {
        self.variant = DialogVariant::Destructive;
        self
    }

    pub fn confirm_label(&self) -> &str {
        self.confirm_text.as_deref().unwrap_or("Confirm")
    }

    pub fn cancel_label(&self) -> &str {
        self.cancel_text.as_deref().unwrap_or("Cancel")
    }
}

impl PartialEq for ConfirmRequest {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.confirm_text == other.confirm_text
            && self.cancel_text == other.cancel_text
            && self.variant == other.variant
            && Rc::ptr_eq(&self.on_confirm, &other.on_confirm)
    }
}

impl fmt::Debug for ConfirmRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmRequest")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

/// Settles the dialog when dropped, also when the confirmation is abandoned
/// mid-flight.
struct Confirming<'a>(&'a mut ConfirmDialogState);

impl Drop for Confirming<'_> {
    fn drop(&mut self) {
        self.0.finish_confirm();
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfirmDialogState {
    pub request: Option<ConfirmRequest>,
    pub is_open: bool,
    pub is_confirming: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmDialogAction {
    Show(ConfirmRequest),
    Hide,
    ConfirmStarted,
    ConfirmFinished,
}

impl ConfirmDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_dialog(&mut self, request: ConfirmRequest) {
        self.request = Some(request);
        self.is_open = true;
    }

    /// Cancel path: drops the request without running it.
    pub fn hide_dialog(&mut self) {
        self.is_open = false;
        self.request = None;
    }

    /// The action `begin_confirm` would hand out, without marking anything.
    /// `None` when nothing is pending or a confirmation is already running.
    pub fn pending_action(&self) -> Option<ConfirmCallback> {
        if !self.is_open || self.is_confirming {
            return None;
        }
        self.request.as_ref().map(|r| Rc::clone(&r.on_confirm))
    }

    /// Marks the dialog as confirming and hands out the action to run.
    pub fn begin_confirm(&mut self) -> Option<ConfirmCallback> {
        let callback = self.pending_action()?;
        self.is_confirming = true;
        Some(callback)
    }

    pub fn finish_confirm(&mut self) {
        self.is_confirming = false;
        self.hide_dialog();
    }

    /// Runs the pending action and dismisses the dialog whatever it returns.
    pub async fn handle_confirm(&mut self) -> Result<(), AppError> {
        let Some(on_confirm) = self.begin_confirm() else {
            log::warn!("⚠️ Confirm requested with no pending dialog");
            return Ok(());
        };

        let confirming = Confirming(self);
        let outcome = on_confirm().await;
        drop(confirming);

        if let Err(e) = &outcome {
            log::error!("❌ Confirmed action failed: {}", e);
        }
        outcome
    }

    pub fn apply(&mut self, action: ConfirmDialogAction) {
        match action {
            ConfirmDialogAction::Show(request) => self.show_dialog(request),
            ConfirmDialogAction::Hide => self.hide_dialog(),
            ConfirmDialogAction::ConfirmStarted => self.is_confirming = true,
            ConfirmDialogAction::ConfirmFinished => self.finish_confirm(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn counting_request(calls: Rc<Cell<u32>>, fail: bool) -> ConfirmRequest {
        ConfirmRequest::new("Delete volunteer", "This cannot be undone.", move || {
            let calls = Rc::clone(&calls);
            async move {
                calls.set(calls.get() + 1);
                if fail {
                    Err(ApiError::Http { status: 500, message: "boom".into() }.into())
                } else {
                    Ok(())
                }
            }
        })
        .destructive()
    }

    #[test]
    fn confirm_runs_action_and_hides() {
        let calls = Rc::new(Cell::new(0));
        let mut dialog = ConfirmDialogState::new();
        dialog.show_dialog(counting_request(Rc::clone(&calls), false));
        assert!(dialog.is_open);

        assert!(block_on(dialog.handle_confirm()).is_ok());
        assert_eq!(calls.get(), 1);
        assert!(!dialog.is_open);
        assert!(!dialog.is_confirming);
        assert!(dialog.request.is_none());
    }

    #[test]
    fn failing_action_still_dismisses() {
        let calls = Rc::new(Cell::new(0));
        let mut dialog = ConfirmDialogState::new();
        dialog.show_dialog(counting_request(Rc::clone(&calls), true));

        let outcome = block_on(dialog.handle_confirm());

        assert!(matches!(outcome, Err(AppError::Api(ApiError::Http { status: 500, .. }))));
        assert!(!dialog.is_open);
        assert!(!dialog.is_confirming);
    }

    #[test]
    fn cancel_does_not_run_action() {
        let calls = Rc::new(Cell::new(0));
        let mut dialog = ConfirmDialogState::new();
        dialog.apply(ConfirmDialogAction::Show(counting_request(Rc::clone(&calls), false)));
        dialog.apply(ConfirmDialogAction::Hide);

        assert!(block_on(dialog.handle_confirm()).is_ok());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn second_begin_while_confirming_is_ignored() {
        let calls = Rc::new(Cell::new(0));
        let mut dialog = ConfirmDialogState::new();
        dialog.show_dialog(counting_request(calls, false));

        assert!(dialog.begin_confirm().is_some());
        assert!(dialog.begin_confirm().is_none());
        dialog.finish_confirm();
        assert!(!dialog.is_confirming);
    }

    #[test]
    fn labels_fall_back_to_defaults() {
        let request = ConfirmRequest::new("t", "d", || async { Ok(()) });
        assert_eq!(request.confirm_label(), "Confirm");
        assert_eq!(request.cancel_label(), "Cancel");
        let request = request.confirm_text("Delete").cancel_text("Keep");
        assert_eq!(request.confirm_label(), "Delete");
        assert_eq!(request.cancel_label(), "Keep");
    }

    #[test]
    fn abandoned_confirmation_is_settled() {
        let mut state = ConfirmDialogState::new();
        state.show_dialog(ConfirmRequest::new("Delete", "Sure?", || {
            futures::future::pending::<Result<(), AppError>>()
        }));

        assert!(state.handle_confirm().now_or_never().is_none());

        assert!(!state.is_confirming);
        assert!(!state.is_open);
    }
}
