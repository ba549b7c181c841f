use serde::{Deserialize, Serialize};

use crate::state::{SearchValue, Searchable};

/// Shared document or link (training material, forms...)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Searchable for Resource {
    fn search_value(&self, field: &str) -> SearchValue<'_> {
        match field {
            "title" => (&self.title).into(),
            "description" => (&self.description).into(),
            "category" => (&self.category).into(),
            _ => SearchValue::Missing,
        }
    }
}
