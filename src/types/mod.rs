//! Core types for C.O.R.A: parsed-message structures, research value
//! objects, API request/response types, and error handling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= Parsed Message Types =============

/// The kind of a tagged reasoning span in an assistant response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningKind {
    /// `<thinking>` spans - internal deliberation.
    Thinking,
    /// `<stress_test>` spans - self-validation of the deliberation.
    StressTest,
}

impl ReasoningKind {
    /// The tag token used on the wire for this kind.
    pub fn as_tag(&self) -> &'static str {
        match self {
            ReasoningKind::Thinking => "thinking",
            ReasoningKind::StressTest => "stress_test",
        }
    }
}

/// One reasoning span extracted from an assistant response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReasoningBlock {
    /// Which tag family the span used.
    pub kind: ReasoningKind,
    /// Round number from the `_N` tag suffix; 1 when the suffix is absent.
    pub iteration: u32,
    /// Inner text of the span, trimmed.
    pub body: String,
}

/// A citation extracted from the `<sources>` span.
///
/// `index` is assigned by position among the kept bullet lines (1-based),
/// not by any identifier embedded in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SourceCitation {
    /// 1-based position in the source list.
    pub index: usize,
    /// First http/https token on the bullet line, or the whole line text
    /// when no such token exists.
    pub url: String,
    /// Text trailing the URL on the bullet line, when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Structured view of a tag-annotated assistant response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMessage {
    /// Reasoning spans in order of appearance.
    pub reasoning: Vec<ReasoningBlock>,
    /// User-facing answer text, absent when nothing answer-like was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_answer: Option<String>,
    /// Citations from the first `<sources>` span.
    pub sources: Vec<SourceCitation>,
}

// ============= Research Types =============

/// A single planned search query with the planner's rationale.
///
/// Serialized field names (`query`, `reasoning`) follow the tool contract
/// consumed by the hosting conversational loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchQuery {
    /// The literal query string sent to the search provider.
    #[serde(rename = "query")]
    pub text: String,
    /// Why the planner chose this query.
    #[serde(rename = "reasoning")]
    pub rationale: String,
}

/// One normalized result from the search provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchHit {
    /// Page title; the provider may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Result URL.
    pub url: String,
    /// Extractive highlight snippets, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    /// Short extractive summary, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Outcome of one search unit, positionally aligned with its query.
///
/// A well-formed item populates either `hits` or `error`, never both
/// meaningfully; a failed unit keeps its slot in the batch output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchResultItem {
    /// The originating query (flattened into `query`/`reasoning` fields).
    #[serde(flatten)]
    pub query: SearchQuery,
    /// Ordered hits; empty on per-query failure.
    #[serde(rename = "results")]
    pub hits: Vec<SearchHit>,
    /// Provider-rewritten query, when the provider produced one.
    #[serde(
        rename = "autopromptString",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub autoprompt: Option<String>,
    /// Failure reason for this unit only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResultItem {
    /// Build the failure marker for a query whose search unit failed.
    pub fn failed(query: SearchQuery, reason: impl Into<String>) -> Self {
        Self {
            query,
            hits: Vec::new(),
            autoprompt: None,
            error: Some(reason.into()),
        }
    }

    /// Whether this unit failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Aggregated counters for one research invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResearchMetadata {
    /// Wall-clock duration in milliseconds, planning through join barrier.
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    /// Number of search units executed.
    #[serde(rename = "totalQueries")]
    pub total_queries: usize,
    /// Completion time.
    pub timestamp: DateTime<Utc>,
}

/// Successful research payload: planned queries, positional results,
/// and invocation metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResearchResult {
    /// The planned query set, in planner order.
    pub queries: Vec<SearchQuery>,
    /// One item per query, same order and count as `queries`.
    #[serde(rename = "searchResults")]
    pub search_results: Vec<SearchResultItem>,
    /// Duration, counts, completion timestamp.
    pub metadata: ResearchMetadata,
}

/// Result of a research invocation as handed to the hosting loop.
///
/// Serializes to either the full success payload or a single-field
/// `{"error": ...}` object, so the caller can always serialize the tool
/// result. Partial per-query failures still produce `Completed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ResearchOutcome {
    /// Planning and execution both ran; individual items may carry errors.
    Completed(ResearchResult),
    /// Planning failed; no queries were executed.
    Failed {
        /// Description of the total failure.
        error: String,
    },
}

impl ResearchOutcome {
    /// Whether the operation completed (possibly with per-item failures).
    pub fn is_completed(&self) -> bool {
        matches!(self, ResearchOutcome::Completed(_))
    }
}

// ============= Tool Types =============

/// Declaration of a tool exposed to the hosting conversational loop.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToolDefinition {
    /// Registry name.
    pub name: String,
    /// Human-readable purpose, surfaced to the model.
    pub description: String,
    /// JSON schema of the accepted arguments.
    pub parameters: serde_json::Value,
}

// ============= API Request/Response Types =============

/// Request body for `POST /api/parse`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ParseRequest {
    /// Raw assistant output to parse.
    pub content: String,
}

/// Request body for `POST /api/research`, matching the tool input contract.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResearchRequest {
    /// How many search queries to plan and run (2-6).
    #[serde(rename = "numberOfQueries")]
    pub number_of_queries: u8,
    /// Summary of the conversation so far.
    #[serde(rename = "conversationContext")]
    pub conversation_context: String,
    /// The current user intent, in detail.
    #[serde(rename = "currentIntent")]
    pub current_intent: String,
}

/// One prior conversation turn supplied to `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatTurn {
    /// `system`, `user`, or `assistant`.
    pub role: String,
    /// Turn text.
    pub content: String,
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The new user message.
    pub message: String,
    /// Prior turns, oldest first.
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

/// Response body for `POST /api/chat`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    /// The model output run through the tag parser.
    pub message: ParsedMessage,
    /// Unparsed model output, for callers doing their own rendering.
    pub raw: String,
    /// Which model produced the response.
    pub model: String,
}

// ============= Error Types =============

/// Application-level error taxonomy.
///
/// Per-query search failures never surface here; they are captured as data
/// inside [`SearchResultItem`]. Planner failures are converted to
/// [`ResearchOutcome::Failed`] at the coordinator boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// LLM provider or generation-contract failure.
    #[error("LLM error: {0}")]
    LLM(String),

    /// Search provider failure.
    #[error("Search error: {0}")]
    Search(String),

    /// Caller supplied malformed or out-of-range input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Anything else.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::LLM(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Search(msg) => (axum::http::StatusCode::BAD_GATEWAY, msg),
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AppError>;
