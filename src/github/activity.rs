// Commit activity feed built from public GitHub events.
// Push and create events become one-line summaries for the learning tracker.

use serde::Serialize;

use super::types::Event;

/// Number of events requested from GitHub.
pub const EVENTS_PER_PAGE: u32 = 15;
/// Maximum number of summaries returned.
pub const MAX_COMMITS: usize = 20;

const MESSAGE_LIMIT: usize = 80;
const SHORT_SHA_LEN: usize = 7;

/// One row of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitSummary {
    pub repo: String,
    pub message: String,
    pub sha: String,
    pub date: String,
}

impl CommitSummary {
    fn new(repo: &str, message: impl Into<String>, sha: impl Into<String>, date: &str) -> Self {
        Self {
            repo: repo.to_string(),
            message: message.into(),
            sha: sha.into(),
            date: date.to_string(),
        }
    }
}

/// Flatten push and create events into commit summaries, newest first.
pub fn summarize_events(events: &[Event]) -> Vec<CommitSummary> {
    let mut commits = Vec::new();

    for event in events {
        let repo = event
            .repo
            .as_ref()
            .map(|r| r.name.as_str())
            .unwrap_or("unknown");
        let date = event.created_at.as_deref().unwrap_or_default();

        match event.kind.as_str() {
            "PushEvent" => {
                for commit in &event.payload.commits {
                    commits.push(CommitSummary::new(
                        repo,
                        headline(&commit.message),
                        commit.sha.chars().take(SHORT_SHA_LEN).collect::<String>(),
                        date,
                    ));
                }
            }
            "CreateEvent" => {
                let ref_type = event.payload.ref_type.as_deref().unwrap_or_default();
                commits.push(CommitSummary::new(
                    repo,
                    format!("Created {}", ref_type),
                    "",
                    date,
                ));
            }
            _ => {}
        }
    }

    commits.truncate(MAX_COMMITS);
    commits
}

/// First line of a commit message, capped at 80 characters.
fn headline(message: &str) -> String {
    message
        .split('\n')
        .next()
        .unwrap_or_default()
        .chars()
        .take(MESSAGE_LIMIT)
        .collect()
}

/// Feed shown when GitHub cannot be reached.
pub fn fallback_commits() -> Vec<CommitSummary> {
    vec![
        CommitSummary::new("rajkumar/pygit", "Implement three-way merge", "a1b2c3d", ""),
        CommitSummary::new("rajkumar/portfolio", "Add terminal component", "e4f5g6h", ""),
        CommitSummary::new("rajkumar/job-scraper", "Fix dedup pipeline", "i7j8k9l", ""),
    ]
}
