// GitHub API response types.
// Only the fields the portfolio reads are declared; everything else is ignored.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// GitHub repository as returned by `/users/{user}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    pub html_url: String,
    pub homepage: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
}

/// Public activity event from `/users/{user}/events/public`.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: Option<EventRepo>,
    #[serde(default)]
    pub payload: EventPayload,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

/// Union of the payload fields used by push and create events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub commits: Vec<PushCommit>,
    pub ref_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushCommit {
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub message: String,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

impl RateLimit {
    /// Read the `x-ratelimit-*` headers. Returns `None` when GitHub omitted them.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let read = |name: &str| -> Option<u64> {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        };

        Some(Self {
            limit: read("x-ratelimit-limit")?,
            remaining: read("x-ratelimit-remaining")?,
            reset: read("x-ratelimit-reset").unwrap_or_default(),
        })
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Reset time formatted for logs.
    pub fn reset_at(&self) -> String {
        DateTime::from_timestamp(self.reset as i64, 0)
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_repository_defaults_missing_fields() {
        let json = r#"{
            "name": "pygit",
            "description": null,
            "language": "Python",
            "html_url": "https://github.com/rajkumar/pygit",
            "homepage": null,
            "updated_at": "2026-02-20T08:30:00Z"
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "pygit");
        assert!(repo.topics.is_empty());
        assert_eq!(repo.stargazers_count, 0);
        assert!(!repo.fork);
        assert!(!repo.archived);
        assert!(repo.updated_at.is_some());
    }

    #[test]
    fn test_event_without_payload_fields() {
        let json = r#"{"type": "WatchEvent", "repo": {"name": "a/b"}, "payload": {}}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, "WatchEvent");
        assert!(event.payload.commits.is_empty());
        assert!(event.created_at.is_none());
    }

    #[test]
    fn test_rate_limit_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("60"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("0"));
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("1700000000"));

        let limit = RateLimit::from_headers(&headers).unwrap();
        assert_eq!(limit.limit, 60);
        assert!(limit.is_exhausted());
        assert_ne!(limit.reset_at(), "unknown");

        assert!(RateLimit::from_headers(&HeaderMap::new()).is_none());
    }
}
