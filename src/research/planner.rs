//! Constrained-count search query generation.

use crate::llm::LLMClient;
use crate::types::{AppError, Result, SearchQuery};
use serde::Deserialize;
use std::sync::Arc;

/// Fewest queries a research invocation may request.
pub const MIN_QUERIES: u8 = 2;
/// Most queries a research invocation may request.
pub const MAX_QUERIES: u8 = 6;

const PLANNER_SYSTEM: &str = "You are a research planning assistant. You design diverse, focused \
web search queries. You respond with a single JSON object and no other text, no markdown \
fences, no commentary.";

/// Generates the query set for one research invocation.
///
/// The backing generation call is constrained to return precisely the
/// requested number of queries. A miscounted or malformed response is a
/// contract violation of the model and surfaces as an error; it is never
/// padded or truncated, and there are no retries at this layer.
pub struct QueryPlanner {
    llm: Arc<dyn LLMClient>,
}

impl QueryPlanner {
    pub fn new(llm: Arc<dyn LLMClient>) -> Self {
        Self { llm }
    }

    /// Plan exactly `count` queries for the given conversation context and
    /// current user intent.
    pub async fn plan(
        &self,
        count: u8,
        conversation_context: &str,
        current_intent: &str,
    ) -> Result<Vec<SearchQuery>> {
        if !(MIN_QUERIES..=MAX_QUERIES).contains(&count) {
            return Err(AppError::InvalidInput(format!(
                "query count must be between {} and {}, got {}",
                MIN_QUERIES, MAX_QUERIES, count
            )));
        }

        let prompt = build_prompt(count, conversation_context, current_intent);
        let response = self.llm.generate_with_system(PLANNER_SYSTEM, &prompt).await?;

        let queries = parse_queries(&response)?;
        if queries.len() != count as usize {
            return Err(AppError::LLM(format!(
                "planner returned {} queries, expected {}",
                queries.len(),
                count
            )));
        }

        tracing::debug!(count, model = self.llm.model_name(), "planned search queries");
        Ok(queries)
    }
}

fn build_prompt(count: u8, conversation_context: &str, current_intent: &str) -> String {
    format!(
        "Based on the following context, generate exactly {count} search queries to gather \
comprehensive information:\n\n\
Conversation Context: {conversation_context}\n\
Current User Intent: {current_intent}\n\
Current Date: {date}\n\n\
Generate {count} queries that:\n\
- Cover different aspects of the topic\n\
- Are specific and focused\n\
- Will yield relevant but diverse results\n\
- Help build a comprehensive understanding\n\n\
For each query, provide the search query itself and the reasoning for how it contributes \
to the overall information gathering strategy.\n\n\
Respond with a JSON object of exactly this shape, containing exactly {count} entries:\n\
{{\"queries\": [{{\"query\": \"...\", \"reasoning\": \"...\"}}]}}",
        count = count,
        conversation_context = conversation_context,
        current_intent = current_intent,
        date = chrono::Utc::now().format("%B %d, %Y"),
    )
}

// ============= Response Parsing =============

#[derive(Debug, Deserialize)]
struct PlannedQueries {
    queries: Vec<PlannedQuery>,
}

#[derive(Debug, Deserialize)]
struct PlannedQuery {
    query: String,
    reasoning: String,
}

fn parse_queries(response: &str) -> Result<Vec<SearchQuery>> {
    let body = strip_code_fences(response);

    let planned: PlannedQueries = serde_json::from_str(body)
        .map_err(|e| AppError::LLM(format!("planner returned malformed JSON: {}", e)))?;

    Ok(planned
        .queries
        .into_iter()
        .map(|q| SearchQuery {
            text: q.query,
            rationale: q.reasoning,
        })
        .collect())
}

/// Models occasionally wrap JSON in a markdown fence despite instructions.
fn strip_code_fences(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the first newline.
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
