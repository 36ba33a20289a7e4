//! Projects-v2 values attached to a pull request

use serde::{Deserialize, Serialize};

/// One project field value of a pull request, flattened to display form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrItem {
    pub field_name: String,
    pub value: String,
}

impl PrItem {
    pub fn new(field_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for PrItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field_name, self.value)
    }
}

/// A pull request together with the values it carries across its projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestProjectItems {
    pub id: String,
    pub title: String,
    pub state: String,
    pub items: Vec<PrItem>,
}
