pub mod query;

use tracing::warn;

use crate::github::graphql::client::GraphQLQuerier;
use crate::github::graphql::error::GraphQLError;
use crate::github::graphql::graphql_types::{PullRequestItemsResponse, QueryResponse, to_variables};
use crate::types::{PrItem, PullRequestNodeId, PullRequestProjectItems};

pub use query::{ProjectItemsQueryLimitSize, PullRequestItemsVariable, pr_project_items_query};

/// Returns the project field values attached to the pull request `node_id`.
pub async fn get_pr_items<Q: GraphQLQuerier>(
    querier: &Q,
    node_id: &PullRequestNodeId,
) -> Result<Vec<PrItem>, GraphQLError> {
    Ok(get_pr_project_items(querier, node_id).await?.items)
}

/// Like [`get_pr_items`], also returning the pull request's id, title and state.
///
/// Values are returned in response order. Values of unknown types, values
/// without a payload and a node that is not a pull request are skipped rather
/// than reported as errors.
pub async fn get_pr_project_items<Q: GraphQLQuerier>(
    querier: &Q,
    node_id: &PullRequestNodeId,
) -> Result<PullRequestProjectItems, GraphQLError> {
    let variables = to_variables(&PullRequestItemsVariable::new(
        node_id.clone(),
        ProjectItemsQueryLimitSize::default(),
    ))?;

    let response: QueryResponse<Option<PullRequestItemsResponse>> =
        querier.query(&pr_project_items_query(), variables).await?;

    if let Ok(errors) = response.graphql_errors() {
        for error in errors {
            warn!("GraphQL error for pull request {}: {}", node_id, error.message);
        }
    }

    let node = response.data.and_then(|data| data.node).unwrap_or_default();
    Ok(PullRequestProjectItems::from(node))
}
