pub mod activity_service;
pub mod api_client;
pub mod auth_service;
pub mod catalog_service;
pub mod notification_service;
pub mod volunteer_service;
pub mod work_log_service;

pub use activity_service::ActivityApi;
pub use api_client::ApiClient;
pub use auth_service::AuthApi;
pub use catalog_service::{ProjectApi, ResourceApi, SkillApi};
pub use notification_service::NotificationApi;
pub use volunteer_service::VolunteerApi;
pub use work_log_service::WorkLogApi;
