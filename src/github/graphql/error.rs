use std::time::Duration;

use thiserror::Error;

/// Maximum number of response body bytes kept in a [`GraphQLError::Status`].
pub const MAX_ERROR_BODY_LEN: usize = 1024;

#[derive(Debug, Error)]
pub enum GraphQLError {
    /// The variable that should carry the GraphQL token is unset or empty.
    #[error("env {0} is not set")]
    MissingToken(String),

    #[error("GraphQL query must not be empty")]
    EmptyQuery,

    #[error("invalid GraphQL endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },

    /// The endpoint answered with something other than 200 OK.
    #[error("non-200 OK status code: {status} body: {body:?}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("GraphQL request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("GraphQL request timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to encode GraphQL request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode GraphQL response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl GraphQLError {
    pub(crate) fn status(status: reqwest::StatusCode, body: &str) -> Self {
        Self::Status {
            status,
            body: truncate_body(body),
        }
    }

    /// HTTP status of a transport error, if the server answered at all.
    pub fn status_code(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(err) => err.status(),
            _ => None,
        }
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LEN {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_keeps_status_and_body() {
        let err = GraphQLError::status(
            reqwest::StatusCode::UNAUTHORIZED,
            r#"{"message":"Bad credentials"}"#,
        );

        assert_eq!(err.status_code(), Some(reqwest::StatusCode::UNAUTHORIZED));
        let msg = err.to_string();
        assert!(msg.contains("401 Unauthorized"), "{msg}");
        assert!(msg.contains("Bad credentials"), "{msg}");
    }

    #[test]
    fn test_long_body_is_truncated_on_char_boundary() {
        let body = "é".repeat(MAX_ERROR_BODY_LEN);
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= MAX_ERROR_BODY_LEN + 3);
        assert!(truncate_body("short") == "short");
    }
}
