//! Planner-executor composition for one research invocation.

use crate::llm::LLMClient;
use crate::research::{executor::SearchExecutor, planner::QueryPlanner};
use crate::search::SearchProvider;
use crate::types::{ResearchMetadata, ResearchOutcome, ResearchResult};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

/// Orchestrates one bounded research operation: plan the queries, fan
/// them out, assemble the result.
///
/// Two failure tiers: a planning failure fails the whole operation and is
/// reported as [`ResearchOutcome::Failed`] (a value, never a propagated
/// error, so the hosting loop can always serialize the tool result);
/// execution-time failures stay inside individual result items and the
/// operation still completes. The operation is not cancellable once
/// started and carries no timeout of its own; the caller's outer deadline
/// bounds it.
pub struct ResearchCoordinator {
    planner: QueryPlanner,
    executor: SearchExecutor,
}

impl ResearchCoordinator {
    pub fn new(llm: Arc<dyn LLMClient>, provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            planner: QueryPlanner::new(llm),
            executor: SearchExecutor::new(provider),
        }
    }

    /// Run one research invocation.
    ///
    /// Duration covers planning through the all-complete join barrier.
    /// Repeated invocations with identical arguments may return different
    /// results as the external index changes; that is expected.
    pub async fn research(
        &self,
        number_of_queries: u8,
        conversation_context: &str,
        current_intent: &str,
    ) -> ResearchOutcome {
        let started = Instant::now();
        tracing::info!(number_of_queries, "starting contextual research");

        let queries = match self
            .planner
            .plan(number_of_queries, conversation_context, current_intent)
            .await
        {
            Ok(queries) => queries,
            Err(e) => {
                tracing::error!(error = %e, "research planning failed");
                return ResearchOutcome::Failed {
                    error: e.to_string(),
                };
            }
        };

        let search_results = self.executor.execute(&queries).await;

        let failed_units = search_results.iter().filter(|item| item.is_error()).count();
        let metadata = ResearchMetadata {
            duration_ms: started.elapsed().as_millis() as u64,
            total_queries: search_results.len(),
            timestamp: Utc::now(),
        };

        tracing::info!(
            duration_ms = metadata.duration_ms,
            total_queries = metadata.total_queries,
            failed_units,
            "research completed"
        );

        ResearchOutcome::Completed(ResearchResult {
            queries,
            search_results,
            metadata,
        })
    }
}
