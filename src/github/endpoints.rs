// GitHub API endpoint functions.
// Typed wrappers over the two listings the portfolio needs.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{Event, Repository};

impl GitHubClient {
    /// Repositories owned by `username`, most recently updated first.
    pub async fn list_user_repos(&self, username: &str, per_page: u32) -> Result<Vec<Repository>> {
        let per_page = per_page.to_string();
        let params = [
            ("sort", "updated"),
            ("direction", "desc"),
            ("type", "owner"),
            ("per_page", per_page.as_str()),
        ];
        let response = self
            .get_with_params(&format!("/users/{}/repos", username), &params)
            .await?;
        let repos: Vec<Repository> = response.json().await?;
        Ok(repos)
    }

    /// Recent public events for `username`.
    pub async fn list_public_events(&self, username: &str, per_page: u32) -> Result<Vec<Event>> {
        let params = [("per_page", per_page.to_string())];
        let response = self
            .get_with_params(&format!("/users/{}/events/public", username), &params)
            .await?;
        let events: Vec<Event> = response.json().await?;
        Ok(events)
    }
}
