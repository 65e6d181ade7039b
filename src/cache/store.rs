// In-memory cache entries.
// Wraps cached data with the instant it was stored and answers TTL questions.

use std::time::Duration;

use tokio::time::Instant;

/// Default TTL for the project listing: 10 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// Wrapper for cached data with metadata.
#[derive(Debug, Clone)]
pub struct CachedData<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached, on the monotonic clock.
    pub cached_at: Instant,
}

impl<T> CachedData<T> {
    /// Create a new cached data entry stamped with the current instant.
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
        }
    }

    /// Time since the entry was stored.
    pub fn age(&self) -> Duration {
        self.cached_at.elapsed()
    }

    /// Check if this cached data has expired based on TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() >= ttl
    }

    /// Check if this cached data is still valid (not expired).
    pub fn is_valid(&self, ttl: Duration) -> bool {
        !self.is_expired(ttl)
    }
}
