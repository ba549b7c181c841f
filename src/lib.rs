// ============================================================================
// VOLUNTEER ADMIN - Yew admin dashboard for volunteers, activities and hours
// ============================================================================
// Layers:
// - models:     records shared with the REST backend
// - services:   HTTP only, one trait per resource
// - state:      framework-free view state (forms, modals, search, dialogs)
// - viewmodels: per-page composition + async handlers
// - hooks:      Yew bindings (use_reducer / use_state) over the above
// - components: rendering
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;
