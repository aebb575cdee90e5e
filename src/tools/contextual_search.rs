//! Contextual web-search tool.
//!
//! Exposes the research coordinator under the tool contract consumed by
//! the hosting conversational loop: the model decides how many searches
//! to run (2-6) and supplies the conversation context and current intent;
//! the tool returns either the full research payload or `{"error": ...}`.

use crate::research::coordinator::ResearchCoordinator;
use crate::research::{MAX_QUERIES, MIN_QUERIES};
use crate::tools::registry::Tool;
use crate::types::{AppError, Result};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;

/// Multi-query web research as a conversation tool.
pub struct ContextualSearchTool {
    coordinator: Arc<ResearchCoordinator>,
}

impl ContextualSearchTool {
    pub fn new(coordinator: Arc<ResearchCoordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for ContextualSearchTool {
    fn name(&self) -> &str {
        "contextual_web_search"
    }

    fn description(&self) -> &str {
        "Executes a specified number of web searches based on your strategic decision. \
         You determine the number of searches (2-6) based on topic complexity and user needs."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "numberOfQueries": {
                    "type": "integer",
                    "minimum": MIN_QUERIES,
                    "maximum": MAX_QUERIES,
                    "description": "Number of searches to perform (2-6), determined based on topic complexity and depth needed"
                },
                "conversationContext": {
                    "type": "string",
                    "description": "Detailed summary of the current conversation context and topic"
                },
                "currentIntent": {
                    "type": "string",
                    "description": "The current user intent or area of curiosity with detail"
                }
            },
            "required": ["numberOfQueries", "conversationContext", "currentIntent"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let number_of_queries = args
            .get("numberOfQueries")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| {
                AppError::InvalidInput("Missing 'numberOfQueries' parameter".to_string())
            })?;

        if !(MIN_QUERIES as u64..=MAX_QUERIES as u64).contains(&number_of_queries) {
            return Err(AppError::InvalidInput(format!(
                "'numberOfQueries' must be between {} and {}, got {}",
                MIN_QUERIES, MAX_QUERIES, number_of_queries
            )));
        }

        let conversation_context = args
            .get("conversationContext")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                AppError::InvalidInput("Missing 'conversationContext' parameter".to_string())
            })?;

        let current_intent = args
            .get("currentIntent")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                AppError::InvalidInput("Missing 'currentIntent' parameter".to_string())
            })?;

        // Total failure serializes to {"error": ...} rather than erroring,
        // so the loop can always feed the result back to the model.
        let outcome = self
            .coordinator
            .research(number_of_queries as u8, conversation_context, current_intent)
            .await;

        serde_json::to_value(&outcome)
            .map_err(|e| AppError::Internal(format!("Failed to serialize tool result: {}", e)))
    }
}
