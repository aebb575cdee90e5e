use crate::types::{Result, SearchHit};
use async_trait::async_trait;

/// Normalized response from one provider call.
///
/// `autoprompt` carries the provider's rewritten query when it produced
/// one; its absence is provider degradation, not an error.
#[derive(Debug, Clone, Default)]
pub struct ProviderSearchResponse {
    /// Ordered result hits.
    pub results: Vec<SearchHit>,
    /// Provider-rewritten query, when available.
    pub autoprompt: Option<String>,
}

/// Abstraction over the external web-search backend.
///
/// One call per query; the executor handles concurrency, staggering, and
/// per-query fault isolation above this trait.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a single query with the fixed shaping configuration.
    async fn search(&self, query: &str) -> Result<ProviderSearchResponse>;

    /// Provider name, for logging.
    fn name(&self) -> &str;
}
