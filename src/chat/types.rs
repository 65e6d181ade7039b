// Chat message types.
// Caller-facing history entries and the OpenAI-compatible wire format.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Speaker of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    #[default]
    User,
    Assistant,
}

impl Role {
    /// Parse a caller-supplied role. Missing or unknown roles become `User`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(r) if r.eq_ignore_ascii_case("system") => Role::System,
            Some(r) if r.eq_ignore_ascii_case("assistant") => Role::Assistant,
            _ => Role::User,
        }
    }
}

/// One message in the forwarded conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// History entry as sent by the terminal UI. Fields are kept as raw JSON so
/// a malformed turn degrades instead of rejecting the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub role: Value,
    #[serde(default)]
    pub content: Value,
}

impl HistoryEntry {
    pub fn new(role: &str, content: &str) -> Self {
        Self {
            role: Value::from(role),
            content: Value::from(content),
        }
    }
}

impl From<&HistoryEntry> for ChatTurn {
    fn from(entry: &HistoryEntry) -> Self {
        let content = match &entry.content {
            Value::Null => String::new(),
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        ChatTurn::new(Role::parse(entry.role.as_str()), content)
    }
}

/// Request body for `/chat/completions`.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatTurn],
    pub max_tokens: u32,
    pub temperature: f32,
}

/// The subset of the completion response that is read.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}
