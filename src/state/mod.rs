// ============================================================================
// STATE MODULE - Framework-free view state containers
// ============================================================================
// Plain structs with synchronous transitions (`apply`). The Yew hooks in
// `crate::hooks` drive the same transitions through `use_reducer`.
// ============================================================================

pub mod confirm_dialog;
pub mod fetch_state;
pub mod form_state;
pub mod modal_state;
pub mod search_filter;

pub use confirm_dialog::*;
pub use fetch_state::*;
pub use form_state::*;
pub use modal_state::*;
pub use search_filter::*;
