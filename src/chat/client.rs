// Groq chat completion client.
// Shapes the bounded conversation and turns every failure into a reply string.

use std::time::Duration;

use reqwest::Client;

use crate::error::{Result, UpstreamError};

use super::types::{ChatTurn, CompletionRequest, CompletionResponse, HistoryEntry, Role};

pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Per-request timeout for chat completions.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(25);
/// Number of caller history turns forwarded upstream.
pub const HISTORY_LIMIT: usize = 10;

const MAX_TOKENS: u32 = 1024;
const TEMPERATURE: f32 = 0.7;

pub const SYSTEM_PROMPT: &str = "You are the AI assistant inside Raj Kumar's portfolio. \
You are running on a Secure AI Gateway built with FastAPI. \
Raj is a B.Tech CSE student at BML Munjal University who builds \
backend systems, DevOps pipelines, and AI/ML tools. \
Keep responses concise and technical. Use terminal-style formatting.";

/// Reply used when no Groq key is configured.
pub const NOT_CONFIGURED_REPLY: &str = "⚠️  GROQ_API_KEY not configured.\n\
The AI Gateway demo requires a Groq API key.\n\
Set it as an environment variable to enable this feature.\n\n\
Architecture Note:\n\
In production, this endpoint acts as a secure proxy —\n\
sanitizing prompts, enforcing rate limits, and streaming\n\
responses from LLaMA 3 via the Groq inference API.";

/// Client for an OpenAI-compatible chat completion endpoint.
///
/// Does not derive Debug so the API key cannot end up in logs.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl ChatClient {
    /// Create a client. Without a key every call answers with
    /// [`NOT_CONFIGURED_REPLY`].
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: GROQ_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Answer `message` given the caller's `history`. Never fails; errors
    /// come back as human-readable replies.
    pub async fn proxy_chat(&self, message: &str, history: &[HistoryEntry]) -> String {
        let messages = build_messages(message, history);
        match self.complete(&messages).await {
            Ok(reply) => reply,
            Err(UpstreamError::MissingCredential(name)) => {
                tracing::debug!(credential = name, "chat requested without a key");
                NOT_CONFIGURED_REPLY.to_string()
            }
            Err(UpstreamError::Http { status }) => {
                tracing::warn!(status, "Groq returned an error status");
                format!("⚠️  Groq API error: {}", status)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Groq request failed");
                format!("⚠️  Gateway error: {}", err)
            }
        }
    }

    /// Send one completion request and return the first choice's content.
    /// Fails with [`UpstreamError::MissingCredential`] before any network
    /// call when no key is configured.
    pub async fn complete(&self, messages: &[ChatTurn]) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(UpstreamError::MissingCredential("GROQ_API_KEY"))?;

        let body = CompletionRequest {
            model: &self.model,
            messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Http {
                status: status.as_u16(),
            });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| UpstreamError::Malformed("completion has no choices".to_string()))
    }
}

/// System prompt, the last ten history turns, then the new user message.
pub fn build_messages(message: &str, history: &[HistoryEntry]) -> Vec<ChatTurn> {
    let recent = &history[history.len().saturating_sub(HISTORY_LIMIT)..];

    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(ChatTurn::new(Role::System, SYSTEM_PROMPT));
    messages.extend(recent.iter().map(ChatTurn::from));
    messages.push(ChatTurn::new(Role::User, message));
    messages
}
