use crate::{
    AppState,
    research::{MAX_QUERIES, MIN_QUERIES, ResearchCoordinator},
    types::{AppError, ResearchOutcome, ResearchRequest, Result},
};
use axum::{Json, extract::State};

/// Plan and execute a contextual web search
///
/// A planning failure is still a 200: the outcome carries a single
/// `error` field instead of results, mirroring the tool contract.
#[utoipa::path(
    post,
    path = "/api/research",
    request_body = ResearchRequest,
    responses(
        (status = 200, description = "Research outcome", body = ResearchOutcome),
        (status = 400, description = "Invalid input")
    ),
    tag = "research"
)]
pub async fn contextual_research(
    State(state): State<AppState>,
    Json(payload): Json<ResearchRequest>,
) -> Result<Json<ResearchOutcome>> {
    if !(MIN_QUERIES..=MAX_QUERIES).contains(&payload.number_of_queries) {
        return Err(AppError::InvalidInput(format!(
            "numberOfQueries must be between {} and {}, got {}",
            MIN_QUERIES, MAX_QUERIES, payload.number_of_queries
        )));
    }

    let coordinator = ResearchCoordinator::new(state.llm.clone(), state.search.clone());
    let outcome = coordinator
        .research(
            payload.number_of_queries,
            &payload.conversation_context,
            &payload.current_intent,
        )
        .await;

    Ok(Json(outcome))
}
