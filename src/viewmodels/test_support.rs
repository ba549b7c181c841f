// In-memory API used by the page viewmodel tests.

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::ApiError;
use crate::models::*;
use crate::services::{ActivityApi, NotificationApi, VolunteerApi, WorkLogApi};

#[derive(Default)]
pub struct FakeApi {
    pub volunteers: RefCell<Vec<Volunteer>>,
    pub activities: RefCell<Vec<Activity>>,
    pub work_logs: RefCell<Vec<WorkLog>>,
    pub notifications: RefCell<Vec<Notification>>,
    pub calls: RefCell<Vec<String>>,
    fail_next: RefCell<Option<ApiError>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next mutation fails with `error`.
    pub fn fail_next(&self, error: ApiError) {
        *self.fail_next.borrow_mut() = Some(error);
    }

    pub fn conflict() -> ApiError {
        ApiError::Http { status: 409, message: "Conflict".into() }
    }

    pub fn server_error() -> ApiError {
        ApiError::Http { status: 500, message: "Internal Server Error".into() }
    }

    fn mutation(&self, call: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.fail_next.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl VolunteerApi for FakeApi {
    async fn list_volunteers(&self) -> Result<Vec<Volunteer>, ApiError> {
        Ok(self.volunteers.borrow().clone())
    }

    async fn create_volunteer(&self, payload: VolunteerPayload) -> Result<Volunteer, ApiError> {
        self.mutation(format!("create_volunteer {}", payload.name))?;
        let mut created = volunteer(&format!("v{}", self.volunteers.borrow().len() + 1), &payload.name);
        created.email = payload.email;
        created.skills = payload.skills;
        self.volunteers.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_volunteer(&self, id: &str, payload: VolunteerPayload) -> Result<Volunteer, ApiError> {
        self.mutation(format!("update_volunteer {}", id))?;
        let mut volunteers = self.volunteers.borrow_mut();
        let row = volunteers
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(ApiError::Http { status: 404, message: "Not Found".into() })?;
        row.name = payload.name;
        row.email = payload.email;
        row.phone = payload.phone;
        row.skills = payload.skills;
        Ok(row.clone())
    }

    async fn delete_volunteer(&self, id: &str) -> Result<(), ApiError> {
        self.mutation(format!("delete_volunteer {}", id))?;
        self.volunteers.borrow_mut().retain(|v| v.id != id);
        Ok(())
    }

    async fn set_volunteer_status(&self, id: &str, status: VolunteerStatus) -> Result<Volunteer, ApiError> {
        self.mutation(format!("set_volunteer_status {} {}", id, status.as_str()))?;
        let mut volunteers = self.volunteers.borrow_mut();
        let row = volunteers
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(ApiError::Http { status: 404, message: "Not Found".into() })?;
        row.status = status;
        Ok(row.clone())
    }

    async fn assign_activity(&self, volunteer_id: &str, activity_id: &str) -> Result<(), ApiError> {
        self.mutation(format!("assign {} {}", volunteer_id, activity_id))
    }

    async fn unassign_activity(&self, volunteer_id: &str, activity_id: &str) -> Result<(), ApiError> {
        self.mutation(format!("unassign {} {}", volunteer_id, activity_id))
    }
}

#[async_trait(?Send)]
impl ActivityApi for FakeApi {
    async fn list_activities(&self) -> Result<Vec<Activity>, ApiError> {
        Ok(self.activities.borrow().clone())
    }

    async fn create_activity(&self, payload: ActivityPayload) -> Result<Activity, ApiError> {
        self.mutation(format!("create_activity {}", payload.name))?;
        let mut created = activity(&format!("a{}", self.activities.borrow().len() + 1), &payload.name);
        created.status = payload.status;
        created.project_id = payload.project_id;
        self.activities.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_activity(&self, id: &str, payload: ActivityPayload) -> Result<Activity, ApiError> {
        self.mutation(format!("update_activity {}", id))?;
        let mut activities = self.activities.borrow_mut();
        let row = activities
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ApiError::Http { status: 404, message: "Not Found".into() })?;
        row.name = payload.name;
        row.status = payload.status;
        Ok(row.clone())
    }

    async fn delete_activity(&self, id: &str) -> Result<(), ApiError> {
        self.mutation(format!("delete_activity {}", id))?;
        self.activities.borrow_mut().retain(|a| a.id != id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl WorkLogApi for FakeApi {
    async fn list_work_logs(&self) -> Result<Vec<WorkLog>, ApiError> {
        Ok(self.work_logs.borrow().clone())
    }

    async fn create_work_log(&self, payload: WorkLogPayload) -> Result<WorkLog, ApiError> {
        self.mutation(format!("create_work_log {}", payload.volunteer_id))?;
        let created = WorkLog {
            id: format!("w{}", self.work_logs.borrow().len() + 1),
            volunteer_id: payload.volunteer_id,
            volunteer_name: String::new(),
            project_id: Some(payload.project_id),
            activity_id: payload.activity_id,
            activity_name: None,
            date: payload.date,
            hours: payload.hours,
            description: payload.description,
            status: WorkLogStatus::Pending,
        };
        self.work_logs.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn set_work_log_status(&self, id: &str, status: WorkLogStatus) -> Result<WorkLog, ApiError> {
        self.mutation(format!("set_work_log_status {} {}", id, status.as_str()))?;
        let mut logs = self.work_logs.borrow_mut();
        let row = logs
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(ApiError::Http { status: 404, message: "Not Found".into() })?;
        row.status = status;
        Ok(row.clone())
    }

    async fn delete_work_log(&self, id: &str) -> Result<(), ApiError> {
        self.mutation(format!("delete_work_log {}", id))?;
        self.work_logs.borrow_mut().retain(|w| w.id != id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl NotificationApi for FakeApi {
    async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        Ok(self.notifications.borrow().clone())
    }

    async fn mark_notification_read(&self, id: &str) -> Result<Notification, ApiError> {
        self.mutation(format!("mark_read {}", id))?;
        let mut notifications = self.notifications.borrow_mut();
        let row = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(ApiError::Http { status: 404, message: "Not Found".into() })?;
        row.read = true;
        Ok(row.clone())
    }
}

/// Collects toasts emitted by a handler.
#[derive(Default)]
pub struct ToastLog(pub RefCell<Vec<Toast>>);

impl ToastLog {
    pub fn push(&self, toast: Toast) {
        self.0.borrow_mut().push(toast);
    }

    pub fn titles(&self) -> Vec<String> {
        self.0.borrow().iter().map(|t| t.title.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

pub fn volunteer(id: &str, name: &str) -> Volunteer {
    Volunteer {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.org", id),
        phone: None,
        skills: Vec::new(),
        status: VolunteerStatus::Active,
        activity_ids: Vec::new(),
        total_hours: 0.0,
    }
}

pub fn activity(id: &str, name: &str) -> Activity {
    Activity {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        location: None,
        project_id: None,
        date: None,
        status: ActivityStatus::Planned,
        capacity: None,
        volunteer_ids: Vec::new(),
    }
}

pub fn project(id: &str, start: Option<NaiveDate>) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {}", id),
        description: String::new(),
        start_date: start,
        end_date: None,
        status: None,
    }
}

pub fn notification(id: &str, title: &str, read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: String::new(),
        read,
        created_at: None,
    }
}

pub fn work_log(id: &str, volunteer_name: &str, status: WorkLogStatus) -> WorkLog {
    WorkLog {
        id: id.to_string(),
        volunteer_id: format!("vol-{}", id),
        volunteer_name: volunteer_name.to_string(),
        project_id: None,
        activity_id: None,
        activity_name: None,
        date: date(2024, 5, 1),
        hours: 2.0,
        description: String::new(),
        status,
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
