// portfolio-api library.
// Terminal commands, Groq chat proxy, and a cached GitHub project listing.

pub mod cache;
pub mod chat;
pub mod commands;
pub mod config;
pub mod error;
pub mod github;
pub mod http;
pub mod projects;
pub mod state;
pub mod tracing_setup;

#[cfg(test)]
pub(crate) mod test_support;
