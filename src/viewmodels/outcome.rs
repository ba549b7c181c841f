// Mutation result -> toast. Shared by the page hooks and the async handlers
// so both paths show the same messages. `None` means the failure is reported
// on the form instead (409 conflicts).

use crate::error::ApiError;
use crate::models::{Activity, Notification, Toast, Volunteer, VolunteerStatus, WorkLog, WorkLogStatus};

pub fn volunteer_created(result: &Result<Volunteer, ApiError>) -> Option<Toast> {
    match result {
        Ok(v) => Some(Toast::success("Volunteer created", format!("{} was added.", v.name))),
        Err(e) if e.is_conflict() => None,
        Err(_) => Some(Toast::failure("create volunteer")),
    }
}

pub fn volunteer_updated(result: &Result<Volunteer, ApiError>) -> Option<Toast> {
    match result {
        Ok(v) => Some(Toast::success("Volunteer updated", format!("{} was saved.", v.name))),
        Err(e) if e.is_conflict() => None,
        Err(_) => Some(Toast::failure("update volunteer")),
    }
}

pub fn volunteer_status_changed(result: &Result<Volunteer, ApiError>) -> Toast {
    match result {
        Ok(v) => {
            let state = match v.status {
                VolunteerStatus::Active => "activated",
                VolunteerStatus::Inactive => "deactivated",
            };
            Toast::success("Status updated", format!("{} was {}.", v.name, state))
        }
        Err(_) => Toast::failure("update volunteer status"),
    }
}

pub fn volunteer_deleted(result: &Result<(), ApiError>) -> Toast {
    match result {
        Ok(()) => Toast::success("Volunteer deleted", "The volunteer was removed."),
        Err(_) => Toast::failure("delete volunteer"),
    }
}

pub fn activity_assigned(result: &Result<(), ApiError>) -> Toast {
    match result {
        Ok(()) => Toast::success("Activity assigned", "The volunteer was added to the activity."),
        Err(_) => Toast::failure("assign activity"),
    }
}

pub fn activity_unassigned(result: &Result<(), ApiError>) -> Toast {
    match result {
        Ok(()) => Toast::success("Activity unassigned", "The volunteer was removed from the activity."),
        Err(_) => Toast::failure("unassign activity"),
    }
}

pub fn activity_created(result: &Result<Activity, ApiError>) -> Option<Toast> {
    match result {
        Ok(a) => Some(Toast::success("Activity created", format!("“{}” was added.", a.name))),
        Err(e) if e.is_conflict() => None,
        Err(_) => Some(Toast::failure("create activity")),
    }
}

pub fn activity_updated(result: &Result<Activity, ApiError>) -> Option<Toast> {
    match result {
        Ok(a) => Some(Toast::success("Activity updated", format!("“{}” was saved.", a.name))),
        Err(e) if e.is_conflict() => None,
        Err(_) => Some(Toast::failure("update activity")),
    }
}

pub fn activity_deleted(result: &Result<(), ApiError>) -> Toast {
    match result {
        Ok(()) => Toast::success("Activity deleted", "The activity was removed."),
        Err(_) => Toast::failure("delete activity"),
    }
}

pub fn hours_logged(result: &Result<WorkLog, ApiError>) -> Toast {
    match result {
        Ok(log) => Toast::success("Hours logged", format!("{} h recorded for {}.", log.hours, log.date)),
        Err(_) => Toast::failure("log hours"),
    }
}

pub fn work_log_reviewed(result: &Result<WorkLog, ApiError>) -> Toast {
    match result {
        Ok(log) => match log.status {
            WorkLogStatus::Approved => Toast::success("Hours approved", "The work log was approved."),
            WorkLogStatus::Rejected => Toast::success("Hours rejected", "The work log was rejected."),
            WorkLogStatus::Pending => Toast::success("Hours updated", "The work log is pending review."),
        },
        Err(_) => Toast::failure("update work log"),
    }
}

pub fn work_log_deleted(result: &Result<(), ApiError>) -> Toast {
    match result {
        Ok(()) => Toast::success("Work log deleted", "The work log was removed."),
        Err(_) => Toast::failure("delete work log"),
    }
}

/// Marking read is silent unless it fails.
pub fn notification_marked_read(result: &Result<Notification, ApiError>) -> Option<Toast> {
    result.as_ref().err().map(|_| Toast::failure("mark notification as read"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ToastVariant;
    use crate::viewmodels::test_support::{volunteer, work_log};

    #[test]
    fn conflicts_produce_no_toast() {
        let conflict = ApiError::Http { status: 409, message: "dup".into() };
        assert!(volunteer_created(&Err(conflict.clone())).is_none());
        assert!(activity_updated(&Err(conflict)).is_none());
    }

    #[test]
    fn other_failures_use_generic_message() {
        let toast = volunteer_deleted(&Err(ApiError::Network("offline".into())));
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.description, "Failed to delete volunteer. Please try again.");
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }

    #[test]
    fn status_toast_names_new_state() {
        let mut v = volunteer("v1", "Ana");
        v.status = VolunteerStatus::Inactive;
        assert_eq!(volunteer_status_changed(&Ok(v)).description, "Ana was deactivated.");
    }

    #[test]
    fn review_toast_follows_status() {
        let approved = work_log("w1", "Ana", WorkLogStatus::Approved);
        assert_eq!(work_log_reviewed(&Ok(approved)).title, "Hours approved");
        let rejected = work_log("w1", "Ana", WorkLogStatus::Rejected);
        assert_eq!(work_log_reviewed(&Ok(rejected)).variant, ToastVariant::Success);
    }
}
