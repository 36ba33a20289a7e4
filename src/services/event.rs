use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::config::{ActionEnv, ConfigError};
use crate::types::event::{Event, EventKind, EventName};

#[derive(Debug, Error)]
pub enum EventError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read event from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unhandled event to unmarshal: {0:?}")]
    Unsupported(String),

    #[error("failed to decode {event_name} event: {source}")]
    Decode {
        event_name: EventName,
        source: serde_json::Error,
    },
}

/// Reads the event that triggered the workflow.
///
/// The payload is loaded from `GITHUB_EVENT_PATH` and decoded according to
/// `GITHUB_EVENT_NAME`.
pub async fn read_event(env: &ActionEnv) -> Result<Event, EventError> {
    let event_path = PathBuf::from(env.event_path()?);
    let raw_name = env.event_name()?;

    let body = tokio::fs::read(&event_path)
        .await
        .map_err(|source| EventError::Read {
            path: event_path.clone(),
            source,
        })?;

    // Only visible with RUNNER_DEBUG=1. Pull requests from forks have no
    // access to secrets, so this is not logged for them.
    debug!(
        "Read event from {}:\n{}",
        event_path.display(),
        String::from_utf8_lossy(&body)
    );

    let event_name =
        EventName::from_str(raw_name).map_err(|_| EventError::Unsupported(raw_name.to_string()))?;

    decode_event(event_name, &body)
}

pub fn decode_event(event_name: EventName, body: &[u8]) -> Result<Event, EventError> {
    let decode_error = |source| EventError::Decode { event_name, source };
    let event = match event_name.kind() {
        EventKind::PullRequest => {
            Event::PullRequest(serde_json::from_slice(body).map_err(decode_error)?)
        }
        EventKind::Push => Event::Push(serde_json::from_slice(body).map_err(decode_error)?),
    };
    Ok(event)
}
