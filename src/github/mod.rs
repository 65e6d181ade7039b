// GitHub API module.
// Client, response types, and the activity feed built on public events.

pub mod activity;
pub mod client;
pub mod endpoints;
pub mod types;

pub use activity::{CommitSummary, fallback_commits, summarize_events};
pub use client::GitHubClient;
pub use types::{Event, Repository};
