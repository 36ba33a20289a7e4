//! Workflow event payloads
//!
//! Only the parts of GitHub's webhook payloads that the tooling reads are
//! modelled. Unknown members are ignored and most known ones are optional, so
//! payloads from newer runners still decode.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Value of `GITHUB_EVENT_NAME` for the events this crate can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum EventName {
    PullRequest,
    PullRequestTarget,
    Push,
    Schedule,
}

/// Shape a triggering event payload is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PullRequest,
    Push,
}

impl EventName {
    pub fn kind(self) -> EventKind {
        match self {
            Self::PullRequest | Self::PullRequestTarget => EventKind::PullRequest,
            Self::Push | Self::Schedule => EventKind::Push,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PullRequest(PullRequestEvent),
    Push(PushEvent),
}

impl Event {
    pub fn as_pull_request(&self) -> Option<&PullRequestEvent> {
        match self {
            Self::PullRequest(event) => Some(event),
            Self::Push(_) => None,
        }
    }

    pub fn as_push(&self) -> Option<&PushEvent> {
        match self {
            Self::Push(event) => Some(event),
            Self::PullRequest(_) => None,
        }
    }

    pub fn repository(&self) -> Option<&RepositoryPayload> {
        match self {
            Self::PullRequest(event) => event.repository.as_ref(),
            Self::Push(event) => event.repository.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestEvent {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub number: u64,
    pub pull_request: PullRequestPayload,
    #[serde(default)]
    pub repository: Option<RepositoryPayload>,
    #[serde(default)]
    pub sender: Option<UserPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequestPayload {
    pub id: u64,
    pub node_id: String,
    pub number: u64,
    pub title: String,
    pub state: String,
    pub draft: bool,
    pub html_url: Option<String>,
    pub user: Option<UserPayload>,
    pub head: Option<BranchRef>,
    pub base: Option<BranchRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchRef {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub sha: String,
    pub label: Option<String>,
}

/// Payload of `push` events. `schedule` events carry a subset of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushEvent {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub before: String,
    pub after: String,
    pub head_commit: Option<CommitPayload>,
    pub repository: Option<RepositoryPayload>,
    pub sender: Option<UserPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitPayload {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryPayload {
    pub id: u64,
    pub node_id: String,
    pub name: String,
    pub full_name: String,
    pub owner: Option<UserPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    pub login: String,
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_event_names_map_to_payload_shapes() {
        let cases = [
            ("pull_request", EventKind::PullRequest),
            ("pull_request_target", EventKind::PullRequest),
            ("push", EventKind::Push),
            ("schedule", EventKind::Push),
        ];
        for (name, kind) in cases {
            let event_name = EventName::from_str(name).unwrap();
            assert_eq!(event_name.kind(), kind);
            assert_eq!(event_name.to_string(), name);
        }

        assert!(EventName::from_str("workflow_dispatch").is_err());
    }
}
