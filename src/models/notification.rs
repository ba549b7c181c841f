use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{SearchValue, Searchable};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Success,
    Destructive,
}

/// Transient notification shown after a mutation
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Success,
        }
    }

    /// Generic failure: "Failed to {action}. Please try again."
    pub fn failure(action: &str) -> Self {
        Self {
            title: "Error".to_string(),
            description: format!("Failed to {}. Please try again.", action),
            variant: ToastVariant::Destructive,
        }
    }
}

/// Message addressed to the signed-in admin, listed on the notifications page
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Value matched by the read-state filter.
    pub fn read_state(&self) -> &'static str {
        if self.read {
            "read"
        } else {
            "unread"
        }
    }
}

impl Searchable for Notification {
    fn search_value(&self, field: &str) -> SearchValue<'_> {
        match field {
            "title" => (&self.title).into(),
            "message" => (&self.message).into(),
            _ => SearchValue::Missing,
        }
    }
}
