use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::state::{SearchValue, Searchable};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkLogStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl WorkLogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkLogStatus::Pending => "pending",
            WorkLogStatus::Approved => "approved",
            WorkLogStatus::Rejected => "rejected",
        }
    }
}

/// One block of hours a volunteer worked
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct WorkLog {
    pub id: String,
    pub volunteer_id: String,
    #[serde(default)]
    pub volunteer_name: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub activity_id: Option<String>,
    #[serde(default)]
    pub activity_name: Option<String>,
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: WorkLogStatus,
}

impl Searchable for WorkLog {
    fn search_value(&self, field: &str) -> SearchValue<'_> {
        match field {
            "volunteer_name" => (&self.volunteer_name).into(),
            "activity_name" => (&self.activity_name).into(),
            "description" => (&self.description).into(),
            _ => SearchValue::Missing,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct WorkLogForm {
    pub volunteer_id: String,
    pub project_id: String,
    pub activity_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub hours: f64,
    pub description: String,
}

/// Body of POST /work-logs
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct WorkLogPayload {
    pub volunteer_id: String,
    pub project_id: String,
    pub activity_id: Option<String>,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct WorkLogStatusRequest {
    pub status: WorkLogStatus,
}
