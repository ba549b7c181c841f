use serde::{Deserialize, Serialize};

use crate::state::{SearchValue, Searchable};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum VolunteerStatus {
    #[default]
    Active,
    Inactive,
}

impl VolunteerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolunteerStatus::Active => "active",
            VolunteerStatus::Inactive => "inactive",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            VolunteerStatus::Active => VolunteerStatus::Inactive,
            VolunteerStatus::Inactive => VolunteerStatus::Active,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Volunteer {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub status: VolunteerStatus,
    /// Activities the volunteer is assigned to
    #[serde(default)]
    pub activity_ids: Vec<String>,
    #[serde(default)]
    pub total_hours: f64,
}

impl Searchable for Volunteer {
    fn search_value(&self, field: &str) -> SearchValue<'_> {
        match field {
            "name" => (&self.name).into(),
            "email" => (&self.email).into(),
            "phone" => (&self.phone).into(),
            "skills" => (&self.skills).into(),
            _ => SearchValue::Missing,
        }
    }
}

/// Create / edit form values
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct VolunteerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
}

impl From<&Volunteer> for VolunteerForm {
    fn from(volunteer: &Volunteer) -> Self {
        Self {
            name: volunteer.name.clone(),
            email: volunteer.email.clone(),
            phone: volunteer.phone.clone().unwrap_or_default(),
            skills: volunteer.skills.clone(),
        }
    }
}

/// Body of POST /volunteers and PUT /volunteers/{id}
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VolunteerPayload {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skills: Vec<String>,
}

impl From<VolunteerForm> for VolunteerPayload {
    fn from(form: VolunteerForm) -> Self {
        let phone = form.phone.trim();
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_lowercase(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            skills: form.skills,
        }
    }
}
