use serde::{Deserialize, Serialize};

/// GraphQL global node ID of a pull request (e.g. `PR_kwDOHbB198459Yt9`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PullRequestNodeId(pub String);

impl PullRequestNodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PullRequestNodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PullRequestNodeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PullRequestNodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
