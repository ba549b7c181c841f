pub mod auth;
pub mod config;
pub mod toast;

pub use auth::{use_api_client, AuthContext};
pub use config::use_config;
pub use toast::{use_toast, ToastContext, ToastProvider};
