// Single-slot project cache.
// Serves the last good listing inside the TTL and falls back to it when a
// refresh fails.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::projects::{Project, RepoSource};

use super::store::CachedData;

/// What `/api/projects` returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsSnapshot {
    pub projects: Vec<Project>,
    /// Served from the cache rather than a fetch made for this request.
    pub cached: bool,
    /// The cached data is past its TTL because the refresh failed.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub stale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProjectsSnapshot {
    fn fresh(projects: Vec<Project>) -> Self {
        Self {
            projects,
            cached: false,
            stale: false,
            error: None,
        }
    }

    fn hit(projects: Vec<Project>) -> Self {
        Self {
            projects,
            cached: true,
            stale: false,
            error: None,
        }
    }

    fn stale(projects: Vec<Project>) -> Self {
        Self {
            projects,
            cached: true,
            stale: true,
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            projects: Vec::new(),
            cached: false,
            stale: false,
            error: Some(error),
        }
    }
}

/// Time-boxed cache in front of a [`RepoSource`].
///
/// The slot lock is only taken to read or replace the entry, never across the
/// upstream call. Concurrent misses may each fetch; the last write wins, which
/// is harmless because every write is a complete listing.
pub struct ProjectCache<S> {
    source: S,
    ttl: Duration,
    slot: RwLock<Option<CachedData<Vec<Project>>>>,
}

impl<S: RepoSource> ProjectCache<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Cached listing if fresh, otherwise refetch with stale-on-error fallback.
    pub async fn get_projects(&self) -> ProjectsSnapshot {
        match self.slot.read().await.as_ref() {
            Some(entry) if entry.is_valid(self.ttl) => {
                tracing::debug!(age_secs = entry.age().as_secs(), "project cache hit");
                return ProjectsSnapshot::hit(entry.data.clone());
            }
            _ => {}
        }

        match self.source.fetch_projects().await {
            Ok(projects) => {
                tracing::info!(count = projects.len(), "project cache refreshed");
                *self.slot.write().await = Some(CachedData::new(projects.clone()));
                ProjectsSnapshot::fresh(projects)
            }
            Err(err) => match self.slot.read().await.as_ref() {
                Some(entry) => {
                    tracing::warn!(
                        error = %err,
                        age_secs = entry.age().as_secs(),
                        "project refresh failed, serving stale cache"
                    );
                    ProjectsSnapshot::stale(entry.data.clone())
                }
                None => {
                    tracing::warn!(error = %err, "project refresh failed with empty cache");
                    ProjectsSnapshot::failed(err.to_string())
                }
            },
        }
    }
}
