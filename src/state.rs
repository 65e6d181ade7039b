// Application state shared by all handlers.
// Built once at startup and cloned cheaply into each request.

use std::sync::Arc;

use crate::cache::ProjectCache;
use crate::chat::ChatClient;
use crate::config::Config;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::projects::GitHubRepoSource;

/// Project cache pinned to the GitHub-backed source.
pub type ConcreteProjectCache = ProjectCache<GitHubRepoSource>;

#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<ConcreteProjectCache>,
    pub github: Arc<GitHubClient>,
    pub github_username: String,
    pub chat: Arc<ChatClient>,
}

impl AppState {
    /// Wire the upstream clients and the project cache from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let github = Arc::new(
            GitHubClient::new(config.github_token())?.with_base_url(&config.github_api_base),
        );
        let source = GitHubRepoSource::new(github.clone(), &config.github_username);

        let chat = ChatClient::new(config.groq_api_key().map(str::to_string))?
            .with_base_url(&config.groq_api_base)
            .with_model(&config.groq_model);

        tracing::info!(
            github_user = %config.github_username,
            github_auth = config.github_token().is_some(),
            chat_enabled = chat.is_configured(),
            model = %chat.model(),
            cache_ttl_secs = config.cache_ttl_secs,
            "application state ready"
        );

        Ok(Self {
            projects: Arc::new(ProjectCache::new(source, config.cache_ttl())),
            github,
            github_username: config.github_username.clone(),
            chat: Arc::new(chat),
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::HeaderMap, routing::get};
    use clap::Parser;

    use crate::test_support::spawn_stub;

    use super::*;

    async fn authorization_seen(token: &str) -> String {
        let stub = Router::new().route(
            "/auth",
            get(|headers: HeaderMap| async move {
                headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("none")
                    .to_string()
            }),
        );
        let base = spawn_stub(stub).await;

        let config = Config::try_parse_from([
            "portfolio-api",
            "--github-api-base",
            base.as_str(),
            "--github-token",
            token,
            "--groq-api-key",
            "",
        ])
        .unwrap();
        let state = AppState::from_config(&config).unwrap();

        state
            .github
            .get_with_params("/auth", &[("per_page", "1")])
            .await
            .unwrap()
            .text()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_configured_token_reaches_github() {
        assert_eq!(authorization_seen("ghp_abc").await, "Bearer ghp_abc");
    }

    #[tokio::test]
    async fn test_blank_token_means_anonymous() {
        assert_eq!(authorization_seen("   ").await, "none");
    }
}
