// Terminal command resolver.
// Maps the handful of supported commands to canned text blocks.

use serde::{Deserialize, Serialize};

const WHOAMI: &str = include_str!("content/whoami.txt");
const PYGIT: &str = include_str!("content/pygit.txt");
const JOB_SCRAPER: &str = include_str!("content/job_scraper.txt");
const LLD_NOTES: &str = include_str!("content/lld_notes.txt");
const HELP: &str = include_str!("content/help.txt");
const AI_GATEWAY: &str = include_str!("content/ai_gateway.txt");

/// How the terminal should treat a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Text,
    Error,
    /// Switches the terminal into chat mode.
    ChatInit,
}

/// Rendering style hint for the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Bio,
    Project,
    Notes,
    Log,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl CommandResponse {
    fn text(style: Style, content: &str) -> Self {
        Self {
            kind: ResponseKind::Text,
            content: content.to_string(),
            style: Some(style),
        }
    }
}

/// Resolve a raw command line. Matching ignores case and surrounding space.
pub fn resolve(raw: &str) -> CommandResponse {
    let command = raw.trim().to_lowercase();

    match command.as_str() {
        "help" => CommandResponse::text(Style::Notes, HELP),
        "ssh ai_gateway" => CommandResponse {
            kind: ResponseKind::ChatInit,
            content: AI_GATEWAY.to_string(),
            style: Some(Style::Bio),
        },
        "whoami" => CommandResponse::text(Style::Bio, WHOAMI),
        "cat pygit.md" => CommandResponse::text(Style::Project, PYGIT),
        "run job_scraper" => CommandResponse::text(Style::Log, JOB_SCRAPER),
        "view lld_notes" => CommandResponse::text(Style::Notes, LLD_NOTES),
        _ => CommandResponse {
            kind: ResponseKind::Error,
            content: format!(
                "Command not found: {}\nType 'help' for available commands.",
                command
            ),
            style: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_commands() {
        let cases = [
            ("whoami", Style::Bio),
            ("cat pygit.md", Style::Project),
            ("run job_scraper", Style::Log),
            ("view lld_notes", Style::Notes),
            ("help", Style::Notes),
        ];

        for (command, style) in cases {
            let response = resolve(command);
            assert_eq!(response.kind, ResponseKind::Text, "{}", command);
            assert_eq!(response.style, Some(style), "{}", command);
            assert!(!response.content.trim().is_empty(), "{}", command);
        }
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(resolve("  WhoAmI \n"), resolve("whoami"));
    }

    #[test]
    fn test_ssh_starts_chat() {
        let response = resolve("ssh ai_gateway");
        assert_eq!(response.kind, ResponseKind::ChatInit);
        assert!(response.content.contains("AI Gateway"));
    }

    #[test]
    fn test_unknown_command() {
        let response = resolve("  RM -RF / ");
        assert_eq!(response.kind, ResponseKind::Error);
        assert_eq!(
            response.content,
            "Command not found: rm -rf /\nType 'help' for available commands."
        );
        assert!(response.style.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "error");
        assert!(json.get("style").is_none());
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = resolve("help").content;
        for command in ["whoami", "cat pygit.md", "run job_scraper", "view lld_notes", "ssh ai_gateway"] {
            assert!(help.contains(command), "{}", command);
        }
    }
}
