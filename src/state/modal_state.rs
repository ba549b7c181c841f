// ============================================================================
// MODAL STATE - Open flag and payload for one dialog
// ============================================================================

/// Open/closed flag plus the payload a dialog was opened with.
///
/// `data` is only meaningful while the modal is open. Closing keeps the last
/// payload around so exit animations can still render it.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState<P> {
    pub is_open: bool,
    pub data: Option<P>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalAction<P> {
    Open(Option<P>),
    Close,
    Toggle(bool),
    /// Replaces the payload without touching `is_open`.
    SetData(Option<P>),
}

impl<P> Default for ModalState<P> {
    fn default() -> Self {
        Self { is_open: false, data: None }
    }
}

impl<P> ModalState<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_modal(&mut self, payload: Option<P>) {
        self.is_open = true;
        self.data = payload;
    }

    pub fn close_modal(&mut self) {
        self.is_open = false;
    }

    pub fn toggle_modal(&mut self, next_open: bool) {
        self.is_open = next_open;
    }

    /// Payload while open, `None` otherwise.
    pub fn payload(&self) -> Option<&P> {
        if self.is_open {
            self.data.as_ref()
        } else {
            None
        }
    }

    pub fn apply(&mut self, action: ModalAction<P>) {
        match action {
            ModalAction::Open(payload) => self.open_modal(payload),
            ModalAction::Close => self.close_modal(),
            ModalAction::Toggle(next_open) => self.toggle_modal(next_open),
            ModalAction::SetData(data) => self.data = data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let modal = ModalState::<String>::new();
        assert!(!modal.is_open);
        assert!(modal.data.is_none());
    }

    #[test]
    fn reopening_replaces_payload() {
        let mut modal = ModalState::new();
        modal.open_modal(Some(vec!["x"]));
        modal.close_modal();
        modal.open_modal(Some(vec!["y"]));

        assert!(modal.is_open);
        assert_eq!(modal.data, Some(vec!["y"]));
    }

    #[test]
    fn close_keeps_payload_but_hides_it() {
        let mut modal = ModalState::new();
        modal.apply(ModalAction::Open(Some(7)));
        modal.apply(ModalAction::Close);

        assert_eq!(modal.data, Some(7));
        assert_eq!(modal.payload(), None);
    }

    #[test]
    fn toggle_sets_flag_directly() {
        let mut modal = ModalState::<()>::new();
        modal.toggle_modal(true);
        assert!(modal.is_open);
        modal.toggle_modal(true);
        assert!(modal.is_open);
        modal.toggle_modal(false);
        assert!(!modal.is_open);
    }

    #[test]
    fn open_without_payload_clears_previous_one() {
        let mut modal = ModalState::new();
        modal.open_modal(Some("edit"));
        modal.open_modal(None);
        assert!(modal.data.is_none());
    }
}
