use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ActionEnv;
use crate::github::graphql::error::GraphQLError;
use crate::github::graphql::graphql_types::{
    GraphQLPayload, QueryResponse, RateLimit, RateLimitResponse, Variables,
};
use crate::github::graphql::transport::{GraphQLTransport, HttpTransport};

const RATE_LIMIT_QUERY: &str = "{rateLimit {cost limit remaining resetAt}}";

/// Something that can run a GraphQL query and decode its `data`.
pub trait GraphQLQuerier {
    /// Runs `query` and decodes `data` into `R`.
    ///
    /// GraphQL `errors` in a 200 response do not fail the call; they are left
    /// on the returned [`QueryResponse`].
    #[allow(async_fn_in_trait)]
    async fn query<R: DeserializeOwned>(
        &self,
        query: &str,
        variables: Variables,
    ) -> Result<QueryResponse<R>, GraphQLError>;
}

/// Typed GraphQL client on top of a [`GraphQLTransport`].
#[derive(Debug, Clone)]
pub struct GraphQLClient<T = HttpTransport> {
    transport: T,
}

impl<T: GraphQLTransport> GraphQLClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn rate_limit(&self) -> Result<RateLimit, GraphQLError> {
        let response: QueryResponse<RateLimitResponse> =
            self.query(RATE_LIMIT_QUERY, Variables::new()).await?;
        Ok(response.data.rate_limit)
    }
}

impl<T: GraphQLTransport> GraphQLQuerier for GraphQLClient<T> {
    async fn query<R: DeserializeOwned>(
        &self,
        query: &str,
        variables: Variables,
    ) -> Result<QueryResponse<R>, GraphQLError> {
        let payload = GraphQLPayload::new(query, variables);
        let raw = self.transport.send(&payload).await?;
        QueryResponse::from_raw(raw)
    }
}

impl GraphQLClient<HttpTransport> {
    /// Builds a client authenticated with the token stored in `token_var`.
    ///
    /// A rate limit query is issued right away so that a bad token or an
    /// unreachable endpoint fails here rather than on first use.
    pub async fn from_env(env: &ActionEnv, token_var: &str) -> Result<Self, GraphQLError> {
        let token = env
            .get(token_var)
            .ok_or_else(|| GraphQLError::MissingToken(token_var.to_string()))?;

        let transport = HttpTransport::new(env.graphql_url(), Some(token.to_string()), None)?;
        let client = Self::new(transport);

        let rate_limit = client.rate_limit().await?;
        debug!(
            "Rate limit remaining: {}, reset at: {}",
            rate_limit.remaining,
            rate_limit.reset_at.to_rfc2822()
        );

        Ok(client)
    }
}
