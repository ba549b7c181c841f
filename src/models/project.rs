use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::state::{SearchValue, Searchable};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Project {
    /// "2024-03-01 – 2024-06-30", open-ended when either date is missing.
    pub fn period(&self) -> String {
        let show = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_else(|| "…".to_string());
        format!("{} – {}", show(self.start_date), show(self.end_date))
    }
}

impl Searchable for Project {
    fn search_value(&self, field: &str) -> SearchValue<'_> {
        match field {
            "name" => (&self.name).into(),
            "description" => (&self.description).into(),
            "status" => (&self.status).into(),
            _ => SearchValue::Missing,
        }
    }
}
