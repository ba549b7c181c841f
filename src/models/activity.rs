use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::state::{SearchValue, Searchable};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    #[default]
    Planned,
    Ongoing,
    Completed,
    Cancelled,
}

impl ActivityStatus {
    pub const ALL: [ActivityStatus; 4] = [
        ActivityStatus::Planned,
        ActivityStatus::Ongoing,
        ActivityStatus::Completed,
        ActivityStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Planned => "planned",
            ActivityStatus::Ongoing => "ongoing",
            ActivityStatus::Completed => "completed",
            ActivityStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityStatus::Planned => "Planned",
            ActivityStatus::Ongoing => "Ongoing",
            ActivityStatus::Completed => "Completed",
            ActivityStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Activity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: ActivityStatus,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub volunteer_ids: Vec<String>,
}

impl Searchable for Activity {
    fn search_value(&self, field: &str) -> SearchValue<'_> {
        match field {
            "name" => (&self.name).into(),
            "description" => (&self.description).into(),
            "location" => (&self.location).into(),
            _ => SearchValue::Missing,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ActivityForm {
    pub name: String,
    pub description: String,
    pub location: String,
    pub project_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub capacity: Option<u32>,
    pub status: ActivityStatus,
}

impl From<&Activity> for ActivityForm {
    fn from(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            location: activity.location.clone().unwrap_or_default(),
            project_id: activity.project_id.clone(),
            date: activity.date,
            capacity: activity.capacity,
            status: activity.status,
        }
    }
}

/// Body of POST /activities and PUT /activities/{id}
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ActivityPayload {
    pub name: String,
    pub description: String,
    pub location: Option<String>,
    pub project_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub capacity: Option<u32>,
    pub status: ActivityStatus,
}

impl From<ActivityForm> for ActivityPayload {
    fn from(form: ActivityForm) -> Self {
        let location = form.location.trim();
        Self {
            name: form.name.trim().to_string(),
            description: form.description.trim().to_string(),
            location: (!location.is_empty()).then(|| location.to_string()),
            project_id: form.project_id.filter(|id| !id.is_empty()),
            date: form.date,
            capacity: form.capacity,
            status: form.status,
        }
    }
}
