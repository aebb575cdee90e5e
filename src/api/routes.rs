use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Build the API router; callers nest it under `/api` and attach state.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(crate::api::handlers::health::health))
        .route("/parse", post(crate::api::handlers::parse::parse_message))
        .route(
            "/research",
            post(crate::api::handlers::research::contextual_research),
        )
        .route("/chat", post(crate::api::handlers::chat::chat))
        .route("/tools", get(crate::api::handlers::tools::list_tools))
        .route(
            "/tools/{name}",
            post(crate::api::handlers::tools::execute_tool),
        )
}
