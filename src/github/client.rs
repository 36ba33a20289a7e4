use octocrab::Octocrab;
use tokio::time::Duration;
use tracing::debug;

use crate::config::{ActionEnv, GITHUB_TOKEN_VAR};

/// REST API client, authenticated when a token is available.
#[derive(Clone)]
pub struct RestClient {
    client: Octocrab,
    authenticated: bool,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("authenticated", &self.authenticated)
            .finish_non_exhaustive()
    }
}

impl RestClient {
    pub fn new(
        base_uri: &str,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> octocrab::Result<Self> {
        let mut builder = Octocrab::builder().base_uri(base_uri)?;

        let authenticated = token.is_some();
        if let Some(token) = token {
            builder = builder.personal_token(token);
        }

        let timeout_duration = timeout.unwrap_or_else(|| Duration::from_secs(10));
        let connection_timeout = if timeout_duration < Duration::from_secs(10) {
            std::cmp::max(timeout_duration, Duration::from_secs(1))
        } else {
            Duration::from_secs(30)
        };

        let read_write_timeout = std::cmp::max(timeout_duration, Duration::from_secs(1));

        builder = builder
            .set_connect_timeout(Some(connection_timeout))
            .set_read_timeout(Some(read_write_timeout))
            .set_write_timeout(Some(read_write_timeout));

        let client = builder.build()?;

        Ok(Self {
            client,
            authenticated,
        })
    }

    /// Builds a client from `GITHUB_TOKEN`. Without a token the client is
    /// anonymous, which is enough for public data.
    pub fn from_env(env: &ActionEnv) -> octocrab::Result<Self> {
        let token = env.github_token().map(str::to_string);
        if token.is_none() {
            debug!("{} is not set.", GITHUB_TOKEN_VAR);
        }
        Self::new(env.api_url(), token, None)
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn octocrab(&self) -> &Octocrab {
        &self.client
    }
}
