// Chat proxy module.
// Forwards terminal chat sessions to Groq's OpenAI-compatible API.

pub mod client;
pub mod types;

pub use client::{ChatClient, NOT_CONFIGURED_REPLY, build_messages};
pub use types::{ChatTurn, HistoryEntry, Role};
