use serde::{Deserialize, Serialize};

use crate::types::PullRequestNodeId;

const DEFAULT_ITEM_LIMIT: u8 = 20;
const DEFAULT_FIELD_VALUE_LIMIT: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectItemsQueryLimitSize {
    pub item_limit: u8,
    pub field_value_limit: u8,
}

impl Default for ProjectItemsQueryLimitSize {
    fn default() -> Self {
        Self {
            item_limit: DEFAULT_ITEM_LIMIT,
            field_value_limit: DEFAULT_FIELD_VALUE_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestItemsVariable {
    #[serde(rename = "nodeID")]
    pub node_id: PullRequestNodeId,
    #[serde(rename = "itemsMax")]
    pub items_max: u8,
    #[serde(rename = "fieldValuesMax")]
    pub field_values_max: u8,
}

impl PullRequestItemsVariable {
    pub fn new(node_id: PullRequestNodeId, limit_size: ProjectItemsQueryLimitSize) -> Self {
        Self {
            node_id,
            items_max: limit_size.item_limit,
            field_values_max: limit_size.field_value_limit,
        }
    }
}

/// Project field values of a pull request.
///
/// Every value fragment asks for `field { ... on ProjectV2FieldCommon { name } }`
/// so the field name comes back whatever concrete field type it belongs to.
pub fn pr_project_items_query() -> String {
    r#"
        query($nodeID: ID!, $itemsMax: Int!, $fieldValuesMax: Int!) {
            node(id: $nodeID) {
                ... on PullRequest {
                    id
                    title
                    state
                    projectItems(first: $itemsMax) {
                        totalCount
                        nodes {
                            fieldValues(first: $fieldValuesMax) {
                                totalCount
                                nodes {
                                    __typename
                                    ... on ProjectV2ItemFieldTextValue {
                                        field {
                                            ... on ProjectV2FieldCommon {
                                                name
                                            }
                                        }
                                        text
                                    }
                                    ... on ProjectV2ItemFieldSingleSelectValue {
                                        field {
                                            ... on ProjectV2FieldCommon {
                                                name
                                            }
                                        }
                                        name
                                    }
                                    ... on ProjectV2ItemFieldIterationValue {
                                        field {
                                            ... on ProjectV2FieldCommon {
                                                name
                                            }
                                        }
                                        title
                                    }
                                    ... on ProjectV2ItemFieldMilestoneValue {
                                        field {
                                            ... on ProjectV2FieldCommon {
                                                name
                                            }
                                        }
                                        milestone {
                                            title
                                        }
                                    }
                                    ... on ProjectV2ItemFieldRepositoryValue {
                                        field {
                                            ... on ProjectV2FieldCommon {
                                                name
                                            }
                                        }
                                        repository {
                                            name
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    "#
    .to_string()
}
