// Portfolio projects.
// The normalized project card and the source that produces it from GitHub.

pub mod normalize;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::github::GitHubClient;

pub use normalize::normalize_repos;

/// Repositories requested per listing call, before filtering.
pub const LISTING_PAGE_SIZE: u32 = 30;

/// A repository shaped for the portfolio grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech: Vec<String>,
    pub stars: u64,
    pub url: String,
    /// ISO-8601 timestamp, or empty when GitHub omitted it.
    pub updated_at: String,
    pub homepage: String,
}

/// Something that can produce a fresh, fully normalized project list.
#[async_trait]
pub trait RepoSource: Send + Sync {
    async fn fetch_projects(&self) -> Result<Vec<Project>>;
}

/// Lists a GitHub user's own repositories.
#[derive(Debug, Clone)]
pub struct GitHubRepoSource {
    client: Arc<GitHubClient>,
    username: String,
}

impl GitHubRepoSource {
    pub fn new(client: Arc<GitHubClient>, username: impl Into<String>) -> Self {
        Self {
            client,
            username: username.into(),
        }
    }
}

#[async_trait]
impl RepoSource for GitHubRepoSource {
    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let repos = self
            .client
            .list_user_repos(&self.username, LISTING_PAGE_SIZE)
            .await?;
        Ok(normalize_repos(repos))
    }
}
