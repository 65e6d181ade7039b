// Axum router configuration.
// All routes live under /api/ behind open CORS and request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/projects", get(handlers::projects))
        .route("/api/chat", post(handlers::chat))
        .route("/api/commands", post(handlers::command))
        .route("/api/github", get(handlers::github_activity))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
