pub mod project;
mod rate_limit;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::github::graphql::error::GraphQLError;

pub use project::*;
pub use rate_limit::*;

/// GraphQL variables, sent as the `variables` object of the request body.
pub type Variables = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphQLQuery(pub String);

/// Request body of a GraphQL POST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLPayload {
    pub query: GraphQLQuery,
    #[serde(default, skip_serializing_if = "Variables::is_empty")]
    pub variables: Variables,
}

impl GraphQLPayload {
    pub fn new(query: impl Into<String>, variables: Variables) -> Self {
        Self {
            query: GraphQLQuery(query.into()),
            variables,
        }
    }
}

/// Response body of a GraphQL POST with both members left undecoded.
#[derive(Debug, Default, Deserialize)]
pub struct RawResponse {
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
    #[serde(default)]
    pub errors: Option<Box<RawValue>>,
}

/// `data` decoded into the caller's shape, `errors` still raw.
///
/// Errors reported by the server are not treated as failures here; callers
/// that care inspect them with [`QueryResponse::graphql_errors`].
#[derive(Debug)]
pub struct QueryResponse<R> {
    pub data: R,
    pub errors: Option<Box<RawValue>>,
}

impl<R: DeserializeOwned> QueryResponse<R> {
    pub fn from_raw(raw: RawResponse) -> Result<Self, GraphQLError> {
        let data = raw.data.as_deref().map(RawValue::get).unwrap_or("null");
        let data = serde_json::from_str(data).map_err(GraphQLError::Decode)?;
        Ok(Self {
            data,
            errors: raw.errors,
        })
    }
}

impl<R> QueryResponse<R> {
    pub fn graphql_errors(&self) -> Result<Vec<GraphQLErrorEntry>, GraphQLError> {
        match self.errors.as_deref() {
            Some(errors) => {
                let errors: Option<Vec<GraphQLErrorEntry>> =
                    serde_json::from_str(errors.get()).map_err(GraphQLError::Decode)?;
                Ok(errors.unwrap_or_default())
            }
            None => Ok(Vec::new()),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.graphql_errors()
            .map(|errors| !errors.is_empty())
            .unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLErrorEntry {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<serde_json::Value>,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

/// Converts a typed variables struct into a [`Variables`] map.
pub fn to_variables<T: Serialize>(variables: &T) -> Result<Variables, GraphQLError> {
    match serde_json::to_value(variables).map_err(GraphQLError::Encode)? {
        serde_json::Value::Object(map) => Ok(map),
        serde_json::Value::Null => Ok(Variables::new()),
        other => Err(GraphQLError::Encode(serde::ser::Error::custom(format!(
            "GraphQL variables must serialize to an object, got {other}"
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_variables_are_omitted() {
        let payload = GraphQLPayload::new("{ viewer { login } }", Variables::new());

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body, json!({ "query": "{ viewer { login } }" }));
    }

    #[test]
    fn test_variables_are_sent_as_object() {
        let mut variables = Variables::new();
        variables.insert("nodeID".to_string(), json!("PR_kwDOHbB198459Yt9"));
        let payload = GraphQLPayload::new("query($nodeID: ID!) { node(id: $nodeID) { id } }", variables);

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["variables"], json!({ "nodeID": "PR_kwDOHbB198459Yt9" }));
    }

    #[test]
    fn test_errors_are_left_for_the_caller() {
        let raw: RawResponse = serde_json::from_str(
            r#"{"data":{"viewer":{"login":"octocat"}},"errors":[{"message":"partial failure","path":["viewer"]}]}"#,
        )
        .unwrap();

        let response: QueryResponse<serde_json::Value> = QueryResponse::from_raw(raw).unwrap();
        assert_eq!(response.data["viewer"]["login"], "octocat");
        assert!(response.has_errors());
        let errors = response.graphql_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "partial failure");
    }

    #[test]
    fn test_missing_data_decodes_as_null() {
        let raw: RawResponse =
            serde_json::from_str(r#"{"errors":[{"message":"Bad credentials"}]}"#).unwrap();

        let response: QueryResponse<Option<serde_json::Value>> =
            QueryResponse::from_raw(raw).unwrap();
        assert!(response.data.is_none());
        assert!(response.has_errors());
    }

    #[test]
    fn test_shape_mismatch_is_a_decode_error() {
        #[derive(Debug, Deserialize)]
        struct Viewer {
            #[allow(dead_code)]
            login: String,
        }

        let raw: RawResponse = serde_json::from_str(r#"{"data":{"login":42}}"#).unwrap();
        let err = QueryResponse::<Viewer>::from_raw(raw).unwrap_err();
        assert!(matches!(err, GraphQLError::Decode(_)));
    }

    #[test]
    fn test_to_variables_rejects_non_objects() {
        assert!(to_variables(&json!({ "a": 1 })).is_ok());
        assert!(to_variables(&()).unwrap().is_empty());
        assert!(matches!(to_variables(&42), Err(GraphQLError::Encode(_))));
    }
}
