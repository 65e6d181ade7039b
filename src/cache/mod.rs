// Cache module for in-process caching.
// Keeps the GitHub project listing for a short TTL to spare the rate limit.

pub mod projects;
pub mod store;

pub use projects::{ProjectCache, ProjectsSnapshot};
pub use store::{CachedData, DEFAULT_TTL};
