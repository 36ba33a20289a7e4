use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use gh_actions_kit::config::ActionEnv;
use gh_actions_kit::formatter::pr_items_markdown;
use gh_actions_kit::github::graphql::{GraphQLClient, get_pr_project_items};
use gh_actions_kit::services::read_event;
use gh_actions_kit::types::{Event, PullRequestNodeId};

/// Variable holding a token with read access to the organization's projects.
/// The workflow's own `GITHUB_TOKEN` cannot read Projects-v2.
const PROJECTS_TOKEN_VAR: &str = "PROJECTS_TOKEN";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize rustls crypto provider early to prevent "no process-level CryptoProvider available" panics
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    let env = ActionEnv::from_process();

    let level = if env.runner_debug() { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let event = read_event(&env).await.context("Failed to read event")?;

    let pull_request = match &event {
        Event::PullRequest(event) => &event.pull_request,
        Event::Push(push) => {
            tracing::info!(
                "Not a pull request event (ref {:?}), nothing to do",
                push.git_ref
            );
            return Ok(());
        }
    };

    let client = GraphQLClient::from_env(&env, PROJECTS_TOKEN_VAR)
        .await
        .context("Failed to create GraphQL client")?;

    let node_id = PullRequestNodeId::new(pull_request.node_id.clone());
    let project_items = get_pr_project_items(&client, &node_id)
        .await
        .with_context(|| format!("Failed to get project items of {}", node_id))?;

    tracing::info!(
        "Pull request #{} has {} project field values",
        pull_request.number,
        project_items.items.len()
    );
    println!("{}", pr_items_markdown(&project_items));

    Ok(())
}
