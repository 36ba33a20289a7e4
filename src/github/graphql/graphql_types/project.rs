use serde::{Deserialize, Serialize};

use crate::types::project::{PrItem, PullRequestProjectItems};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PullRequestItemsResponse {
    pub node: Option<PullRequestNode>,
}

/// `node(id:)` seen through the `... on PullRequest` fragment. Any other node
/// type comes back as an empty object, so every member is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PullRequestNode {
    pub id: Option<String>,
    pub title: Option<String>,
    pub state: Option<String>,
    pub project_items: Option<ProjectItemsConnection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectItemsConnection {
    pub total_count: Option<u64>,
    pub nodes: Option<Vec<Option<ProjectItemNode>>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectItemNode {
    pub field_values: Option<FieldValuesConnection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldValuesConnection {
    pub total_count: Option<u64>,
    pub nodes: Option<Vec<Option<FieldValueNode>>>,
}

/// Entry of `fieldValues.nodes`.
///
/// A value whose type the query has no fragment for may arrive without a
/// `__typename`; it is kept as untyped JSON and skipped later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValueNode {
    Typed(FieldValue),
    Untyped(serde_json::Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum FieldValue {
    #[serde(rename = "ProjectV2ItemFieldTextValue")]
    Text {
        #[serde(default)]
        field: Option<FieldRef>,
        #[serde(default)]
        text: Option<String>,
    },
    #[serde(rename = "ProjectV2ItemFieldSingleSelectValue")]
    SingleSelect {
        #[serde(default)]
        field: Option<FieldRef>,
        #[serde(default)]
        name: Option<String>,
    },
    #[serde(rename = "ProjectV2ItemFieldIterationValue")]
    Iteration {
        #[serde(default)]
        field: Option<FieldRef>,
        #[serde(default)]
        title: Option<String>,
    },
    #[serde(rename = "ProjectV2ItemFieldMilestoneValue")]
    Milestone {
        #[serde(default)]
        field: Option<FieldRef>,
        #[serde(default)]
        milestone: Option<MilestoneRef>,
    },
    #[serde(rename = "ProjectV2ItemFieldRepositoryValue")]
    Repository {
        #[serde(default)]
        field: Option<FieldRef>,
        #[serde(default)]
        repository: Option<RepositoryRef>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MilestoneRef {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryRef {
    #[serde(default)]
    pub name: Option<String>,
}

impl FieldValue {
    fn field(&self) -> Option<&FieldRef> {
        match self {
            Self::Text { field, .. }
            | Self::SingleSelect { field, .. }
            | Self::Iteration { field, .. }
            | Self::Milestone { field, .. }
            | Self::Repository { field, .. } => field.as_ref(),
            Self::Other => None,
        }
    }

    /// Name of the project field this value belongs to, or `""` when the
    /// response does not carry it.
    pub fn field_name(&self) -> &str {
        self.field()
            .and_then(|field| field.name.as_deref())
            .unwrap_or_default()
    }

    pub fn display_value(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => text.as_deref(),
            Self::SingleSelect { name, .. } => name.as_deref(),
            Self::Iteration { title, .. } => title.as_deref(),
            Self::Milestone { milestone, .. } => milestone.as_ref()?.title.as_deref(),
            Self::Repository { repository, .. } => repository.as_ref()?.name.as_deref(),
            Self::Other => None,
        }
    }

    pub fn to_pr_item(&self) -> Option<PrItem> {
        let value = self.display_value()?;
        Some(PrItem {
            field_name: self.field_name().to_string(),
            value: value.to_string(),
        })
    }
}

impl FieldValueNode {
    pub fn to_pr_item(&self) -> Option<PrItem> {
        match self {
            Self::Typed(value) => value.to_pr_item(),
            Self::Untyped(_) => None,
        }
    }
}

impl PullRequestNode {
    /// Flattens every item's field values into `PrItem`s, in response order.
    pub fn pr_items(&self) -> Vec<PrItem> {
        let items = self
            .project_items
            .iter()
            .flat_map(|items| items.nodes.iter().flatten().flatten());
        let values = items
            .filter_map(|item| item.field_values.as_ref())
            .flat_map(|values| values.nodes.iter().flatten().flatten());

        values
            .filter_map(|value| {
                let item = value.to_pr_item();
                if item.is_none() {
                    tracing::warn!("Skipping project field value without a display value: {:?}", value);
                }
                item
            })
            .collect()
    }
}

impl From<PullRequestNode> for PullRequestProjectItems {
    fn from(node: PullRequestNode) -> Self {
        let items = node.pr_items();
        Self {
            id: node.id.unwrap_or_default(),
            title: node.title.unwrap_or_default(),
            state: node.state.unwrap_or_default(),
            items,
        }
    }
}
