use std::time::{Duration, Instant};

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

use crate::github::graphql::error::GraphQLError;
use crate::github::graphql::graphql_types::{GraphQLPayload, RawResponse};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Sends one GraphQL request and hands back the undecoded response.
pub trait GraphQLTransport {
    #[allow(async_fn_in_trait)]
    async fn send(&self, payload: &GraphQLPayload) -> Result<RawResponse, GraphQLError>;
}

/// [`GraphQLTransport`] over HTTPS with an optional bearer token.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: Url,
    token: Option<String>,
    timeout: Duration,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint.as_str())
            .field("authenticated", &self.token.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpTransport {
    pub fn new(
        endpoint: &str,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GraphQLError> {
        let endpoint = Url::parse(endpoint).map_err(|source| GraphQLError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let connect_timeout = std::cmp::min(timeout, Duration::from_secs(10));

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            token,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl GraphQLTransport for HttpTransport {
    async fn send(&self, payload: &GraphQLPayload) -> Result<RawResponse, GraphQLError> {
        if payload.query.0.trim().is_empty() {
            return Err(GraphQLError::EmptyQuery);
        }

        let body = serde_json::to_vec(payload).map_err(GraphQLError::Encode)?;

        let mut request = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let start_time = Instant::now();

        let response = tokio::time::timeout(self.timeout, request.send())
            .await
            .map_err(|_| GraphQLError::Timeout(self.timeout))??;
        let status = response.status();

        debug!(
            "GraphQL request to {} finished with {} in {:?}",
            self.endpoint,
            status,
            start_time.elapsed()
        );

        // Read the body to the end on every path so the connection can be reused.
        if status != StatusCode::OK {
            let body = response.bytes().await.unwrap_or_default();
            return Err(GraphQLError::status(status, &String::from_utf8_lossy(&body)));
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(GraphQLError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::graphql::graphql_types::Variables;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let err = HttpTransport::new("not a url", None, None).unwrap_err();
        assert!(matches!(err, GraphQLError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let transport = HttpTransport::new(
            "https://api.github.com/graphql",
            Some("ghp_secret".to_string()),
            None,
        )
        .unwrap();

        let debug = format!("{transport:?}");
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("authenticated: true"));
    }

    #[tokio::test]
    async fn test_status_is_kept_when_error_body_is_cut_short() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            while !request.ends_with(b"}") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            // Declares more body than is sent, then closes the connection.
            socket
                .write_all(b"HTTP/1.1 502 Bad Gateway\r\ncontent-length: 100\r\n\r\npartial")
                .await
                .unwrap();
        });

        let transport = HttpTransport::new(&format!("http://{addr}/graphql"), None, None).unwrap();
        let err = transport
            .send(&GraphQLPayload::new("{ viewer { login } }", Variables::new()))
            .await
            .unwrap_err();

        assert!(matches!(err, GraphQLError::Status { .. }), "{err:?}");
        assert_eq!(err.status_code(), Some(StatusCode::BAD_GATEWAY));
    }
}
