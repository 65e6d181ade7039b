// GitHub API HTTP client.
// Handles optional authentication, timeouts, and response status checks.

use std::time::Duration;

use reqwest::{
    Client, Response,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{Result, UpstreamError};

use super::types::RateLimit;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Per-request timeout for GitHub calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub API client. The token is optional; anonymous requests work with a
/// lower rate limit.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client, authenticating when a token is given.
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("portfolio-api"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: GITHUB_API_BASE.to_string(),
        })
    }

    /// Point the client at a different API root (GitHub Enterprise, test stubs).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.get(&url).query(params).send().await?;

        self.observe_rate_limit(&response);
        check_response(response)
    }

    /// Log when the rate limit budget has run out.
    fn observe_rate_limit(&self, response: &Response) {
        let Some(rate_limit) = RateLimit::from_headers(response.headers()) else {
            return;
        };

        if rate_limit.is_exhausted() {
            tracing::warn!(
                limit = rate_limit.limit,
                reset_at = %rate_limit.reset_at(),
                "GitHub rate limit exhausted"
            );
        } else {
            tracing::debug!(remaining = rate_limit.remaining, "GitHub rate limit");
        }
    }
}

/// Map non-2xx responses to a status error.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(UpstreamError::Http {
            status: status.as_u16(),
        })
    }
}
