pub mod activities_page;
pub mod app;
pub mod confirm_dialog;
pub mod field;
pub mod hours_page;
pub mod login_screen;
pub mod modal;
pub mod notifications_page;
pub mod pagination;
pub mod projects_page;
pub mod resources_page;
pub mod search_bar;
pub mod volunteers_page;

pub use activities_page::ActivitiesScreen;
pub use app::{App, AppProps};
pub use hours_page::HoursScreen;
pub use login_screen::LoginScreen;
pub use notifications_page::NotificationsScreen;
pub use projects_page::ProjectsScreen;
pub use resources_page::ResourcesScreen;
pub use volunteers_page::VolunteersScreen;
