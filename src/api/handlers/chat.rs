use crate::{
    AppState, parser,
    types::{ChatRequest, ChatResponse, Result},
};
use axum::{Json, extract::State};

/// System prompt establishing the tagged response protocol and the
/// iterative search strategy for the `contextual_web_search` tool.
pub const SYSTEM_PROMPT: &str = r#"You are C.O.R.A, a contextual research assistant.
You have access to powerful web search capabilities through the contextual_web_search tool.
You use contextual_web_search when contextually relevant to do so.

CONTEXTUAL WEB SEARCH TOOL:
This is a sophisticated search tool you can use to gather current and accurate information:
- Executes multiple targeted searches (you decide how many, 2-6 per call)
- Provides comprehensive results with highlights and summaries
- Designed for multiple iterative calls, each building on previous results

SEARCH STRATEGY:
Always prefer multiple focused tool calls over fewer larger ones:
1. Begin with 2-3 targeted queries in your first tool call
2. Review those results thoroughly
3. Use insights gained to inform your next tool call
4. Use 4-6 queries only when the topic requires immediate broad coverage

During search iteration, use <thinking> tags to evaluate information and
<stress_test> tags to validate understanding before making further calls.

RESPONSE FORMAT:

Your responses must follow this structure:

<thinking>
[Provide your internal reasoning and considerations]
</thinking>

<stress_test>
[Double-check any potential misunderstandings or missing pieces]
</stress_test>

<final_answer>
[Present your final response to the user]
</final_answer>

If using web search results, add:

<sources>
- Source 1 [website url]
- Source 2 [website url]
</sources>

Source Guidelines:
- Only cite sources actually used in your response
- Double-check all citations for accuracy
- Include only the most relevant sources"#;

/// Chat with the assistant
///
/// The raw model output is run through the tag parser; callers get both
/// the structured sections and the unmodified text.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Chat response", body = ChatResponse),
        (status = 400, description = "Invalid input")
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let mut messages: Vec<(String, String)> =
        vec![("system".to_string(), SYSTEM_PROMPT.to_string())];
    for turn in &payload.history {
        messages.push((turn.role.clone(), turn.content.clone()));
    }
    messages.push(("user".to_string(), payload.message.clone()));

    let raw = state.llm.generate_with_history(&messages).await?;
    let message = parser::parse(&raw);

    Ok(Json(ChatResponse {
        message,
        raw,
        model: state.llm.model_name().to_string(),
    }))
}
