//! Environment configuration for a single CI run.
//!
//! The runner injects everything through environment variables. They are read
//! once into an [`ActionEnv`] so that a missing variable is reported up front,
//! before any network call is made.

use std::collections::BTreeMap;

use thiserror::Error;

pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const GITHUB_EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";
pub const GITHUB_EVENT_NAME_VAR: &str = "GITHUB_EVENT_NAME";
pub const GITHUB_GRAPHQL_URL_VAR: &str = "GITHUB_GRAPHQL_URL";
pub const GITHUB_API_URL_VAR: &str = "GITHUB_API_URL";
pub const RUNNER_DEBUG_VAR: &str = "RUNNER_DEBUG";

pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("env {0} is not set")]
    MissingVar(String),
}

/// Immutable snapshot of the environment variables of the current run.
#[derive(Debug, Clone, Default)]
pub struct ActionEnv {
    vars: BTreeMap<String, String>,
}

impl ActionEnv {
    /// Captures the process environment. Variables that are not valid unicode are skipped.
    pub fn from_process() -> Self {
        Self::from_vars(std::env::vars_os().filter_map(|(name, value)| {
            Some((name.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// Returns the value of `name`; an empty value counts as unset.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn require(&self, name: &str) -> Result<&str, ConfigError> {
        self.get(name)
            .ok_or_else(|| ConfigError::MissingVar(name.to_string()))
    }

    pub fn github_token(&self) -> Option<&str> {
        self.get(GITHUB_TOKEN_VAR)
    }

    pub fn event_path(&self) -> Result<&str, ConfigError> {
        self.require(GITHUB_EVENT_PATH_VAR)
    }

    pub fn event_name(&self) -> Result<&str, ConfigError> {
        self.require(GITHUB_EVENT_NAME_VAR)
    }

    pub fn graphql_url(&self) -> &str {
        self.get(GITHUB_GRAPHQL_URL_VAR)
            .unwrap_or(DEFAULT_GRAPHQL_URL)
    }

    pub fn api_url(&self) -> &str {
        self.get(GITHUB_API_URL_VAR).unwrap_or(DEFAULT_API_URL)
    }

    /// True when the workflow was re-run with debug logging enabled.
    pub fn runner_debug(&self) -> bool {
        self.get(RUNNER_DEBUG_VAR) == Some("1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_treated_as_unset() {
        let env = ActionEnv::from_vars([(GITHUB_TOKEN_VAR, ""), (GITHUB_EVENT_NAME_VAR, "push")]);

        assert_eq!(env.github_token(), None);
        assert_eq!(env.event_name(), Ok("push"));
    }

    #[test]
    fn test_require_reports_variable_name() {
        let env = ActionEnv::default();

        let err = env.event_path().unwrap_err();
        assert_eq!(err, ConfigError::MissingVar(GITHUB_EVENT_PATH_VAR.to_string()));
        assert_eq!(err.to_string(), "env GITHUB_EVENT_PATH is not set");
    }

    #[test]
    fn test_endpoints_fall_back_to_github_dot_com() {
        let env = ActionEnv::default();
        assert_eq!(env.graphql_url(), DEFAULT_GRAPHQL_URL);
        assert_eq!(env.api_url(), DEFAULT_API_URL);

        let env = ActionEnv::from_vars([
            (GITHUB_GRAPHQL_URL_VAR, "https://ghe.example.com/api/graphql"),
            (GITHUB_API_URL_VAR, "https://ghe.example.com/api/v3"),
        ]);
        assert_eq!(env.graphql_url(), "https://ghe.example.com/api/graphql");
        assert_eq!(env.api_url(), "https://ghe.example.com/api/v3");
    }

    #[test]
    fn test_runner_debug() {
        assert!(ActionEnv::from_vars([(RUNNER_DEBUG_VAR, "1")]).runner_debug());
        assert!(!ActionEnv::from_vars([(RUNNER_DEBUG_VAR, "0")]).runner_debug());
        assert!(!ActionEnv::default().runner_debug());
    }
}
