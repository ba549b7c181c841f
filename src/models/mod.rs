pub mod activity;
pub mod auth;
pub mod notification;
pub mod project;
pub mod resource;
pub mod skill;
pub mod volunteer;
pub mod work_log;

pub use activity::{Activity, ActivityForm, ActivityPayload, ActivityStatus};
pub use auth::{LoginRequest, LoginResponse, Session, User};
pub use notification::{Notification, Toast, ToastVariant};
pub use project::Project;
pub use resource::Resource;
pub use skill::Skill;
pub use volunteer::{Volunteer, VolunteerForm, VolunteerPayload, VolunteerStatus};
pub use work_log::{WorkLog, WorkLogForm, WorkLogPayload, WorkLogStatus, WorkLogStatusRequest};
