//! Web Search Provider Integration
//!
//! The research executor issues queries through the [`SearchProvider`]
//! trait; [`ExaClient`] is the production implementation against the Exa
//! search API. Tests substitute a scripted provider.
//!
//! Result shaping is fixed for every query in every batch: a bounded
//! result count plus content highlights and a short extractive summary.
//! It is deliberately not configurable at this layer.

/// Exa search API client.
pub mod exa;
/// Provider trait and normalized response type.
pub mod provider;

pub use exa::ExaClient;
pub use provider::{ProviderSearchResponse, SearchProvider};

/// Results requested per query.
pub const NUM_RESULTS: u32 = 5;
/// Sentences per highlight snippet.
pub const HIGHLIGHT_SENTENCES: u32 = 3;
/// Highlight snippets per result URL.
pub const HIGHLIGHTS_PER_URL: u32 = 4;
