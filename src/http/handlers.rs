// Request handlers for the portfolio endpoints.
// Upstream failures are answered with a well-formed body, never an error status.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::cache::ProjectsSnapshot;
use crate::chat::HistoryEntry;
use crate::commands::{self, CommandResponse};
use crate::github::activity::{self, CommitSummary, EVENTS_PER_PAGE};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub command: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub commits: Vec<CommitSummary>,
}

/// GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "portfolio-api",
    }))
}

/// GET /api/projects
pub async fn projects(State(state): State<AppState>) -> Json<ProjectsSnapshot> {
    Json(state.projects.get_projects().await)
}

/// POST /api/chat
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = state
        .chat
        .proxy_chat(&request.message, &request.history)
        .await;
    Json(ChatResponse { reply })
}

/// POST /api/commands
pub async fn command(Json(request): Json<CommandRequest>) -> Json<CommandResponse> {
    Json(commands::resolve(&request.command))
}

/// GET /api/github
pub async fn github_activity(State(state): State<AppState>) -> Json<ActivityResponse> {
    let commits = match state
        .github
        .list_public_events(&state.github_username, EVENTS_PER_PAGE)
        .await
    {
        Ok(events) => activity::summarize_events(&events),
        Err(err) => {
            tracing::warn!(error = %err, "GitHub events unavailable, using fallback feed");
            activity::fallback_commits()
        }
    };

    Json(ActivityResponse { commits })
}
