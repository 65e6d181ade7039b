// Runtime configuration.
// Every option can be given as a flag or through the environment.

use std::time::Duration;

use clap::Parser;

use crate::chat::client::{DEFAULT_MODEL, GROQ_API_BASE};
use crate::github::client::GITHUB_API_BASE;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-api", version, about = "Portfolio terminal backend")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "PORTFOLIO_API_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// GitHub user whose repositories and activity are shown
    #[arg(long, env = "GITHUB_USERNAME", default_value = "rajkumar")]
    pub github_username: String,

    /// GitHub token (optional, raises the rate limit)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    #[arg(long, env = "GITHUB_API_BASE", default_value = GITHUB_API_BASE)]
    pub github_api_base: String,

    /// Groq API key (optional, chat is disabled without it)
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub groq_api_key: Option<String>,

    #[arg(long, env = "GROQ_API_BASE", default_value = GROQ_API_BASE)]
    pub groq_api_base: String,

    #[arg(long, env = "GROQ_MODEL", default_value = DEFAULT_MODEL)]
    pub groq_model: String,

    /// How long the project listing is served from memory
    #[arg(long, env = "PROJECTS_CACHE_TTL_SECS", default_value_t = 600)]
    pub cache_ttl_secs: u64,

    /// Emit logs as JSON lines
    #[arg(long, env = "PORTFOLIO_LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// GitHub token, treating a blank value as unset.
    pub fn github_token(&self) -> Option<&str> {
        non_blank(self.github_token.as_deref())
    }

    /// Groq key, treating a blank value as unset.
    pub fn groq_api_key(&self) -> Option<&str> {
        non_blank(self.groq_api_key.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "portfolio-api",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--github-username",
            "octocat",
            "--cache-ttl-secs",
            "30",
            "--github-api-base",
            "http://localhost:1",
            "--groq-model",
            "llama-3.1-8b-instant",
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.github_username, "octocat");
        assert_eq!(config.cache_ttl(), Duration::from_secs(30));
        assert_eq!(config.github_api_base, "http://localhost:1");
        assert_eq!(config.groq_model, "llama-3.1-8b-instant");
    }

    #[test]
    fn test_blank_credentials_are_unset() {
        let config = Config::try_parse_from([
            "portfolio-api",
            "--github-token",
            "",
            "--groq-api-key",
            "   ",
        ])
        .unwrap();

        assert!(config.github_token().is_none());
        assert!(config.groq_api_key().is_none());
    }

    #[test]
    fn test_credentials_pass_through() {
        let config = Config::try_parse_from([
            "portfolio-api",
            "--github-token",
            "ghp_abc",
            "--groq-api-key",
            "gsk_abc",
        ])
        .unwrap();

        assert_eq!(config.github_token(), Some("ghp_abc"));
        assert_eq!(config.groq_api_key(), Some("gsk_abc"));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Config::try_parse_from(["portfolio-api", "--port", "not-a-port"]).is_err());
    }
}
