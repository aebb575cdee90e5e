//! Staggered parallel search execution with per-item fault isolation.

use crate::search::SearchProvider;
use crate::types::{SearchQuery, SearchResultItem};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Start-time offset between consecutive search units.
///
/// The offset only staggers starts to avoid bursting the provider; once
/// started, units proceed concurrently.
pub const STAGGER_STEP: Duration = Duration::from_millis(250);

/// Runs a batch of search queries as independent concurrent units.
///
/// Each query is one tokio task; a unit's failure (provider error or task
/// abort) is captured as data in its output slot and never affects its
/// siblings. The output sequence has the same length and order as the
/// input, regardless of completion order.
pub struct SearchExecutor {
    provider: Arc<dyn SearchProvider>,
    stagger: Duration,
}

impl SearchExecutor {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self::with_stagger(provider, STAGGER_STEP)
    }

    /// Override the stagger step. The production coordinator always uses
    /// [`STAGGER_STEP`]; this exists for callers embedding the executor
    /// with their own provider rate limits.
    pub fn with_stagger(provider: Arc<dyn SearchProvider>, stagger: Duration) -> Self {
        Self { provider, stagger }
    }

    /// Execute all queries, returning one positional item per query.
    pub async fn execute(&self, queries: &[SearchQuery]) -> Vec<SearchResultItem> {
        let mut set = JoinSet::new();

        for (index, query) in queries.iter().cloned().enumerate() {
            let provider = Arc::clone(&self.provider);
            let delay = self.stagger * index as u32;

            set.spawn(async move {
                tokio::time::sleep(delay).await;

                let item = match provider.search(&query.text).await {
                    Ok(response) => SearchResultItem {
                        query,
                        hits: response.results,
                        autoprompt: response.autoprompt,
                        error: None,
                    },
                    Err(e) => {
                        tracing::warn!(query = %query.text, error = %e, "search unit failed");
                        SearchResultItem::failed(query, e.to_string())
                    }
                };
                (index, item)
            });
        }

        let mut slots: Vec<Option<SearchResultItem>> =
            std::iter::repeat_with(|| None).take(queries.len()).collect();

        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((index, item)) => slots[index] = Some(item),
                Err(e) => tracing::error!(error = %e, "search task failed to join"),
            }
        }

        // A task that panicked or was aborted leaves its slot empty; keep
        // the position with an error marker so output stays aligned.
        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    SearchResultItem::failed(queries[index].clone(), "search task aborted")
                })
            })
            .collect()
    }
}
