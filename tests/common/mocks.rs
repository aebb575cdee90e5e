//! Mock implementations for testing.
//!
//! This module provides mock LLM clients and search providers that can be
//! used across different test files without duplication.

use async_trait::async_trait;
use cora::llm::LLMClient;
use cora::search::{ProviderSearchResponse, SearchProvider};
use cora::types::{AppError, Result, SearchHit};
use std::collections::HashSet;
use std::sync::Mutex;

/// Mock LLM client for testing with configurable responses.
///
/// The client returns the same scripted text for every generation method,
/// or simulates a provider failure.
#[derive(Clone)]
pub struct MockLLMClient {
    response: String,
    should_fail: bool,
}

impl MockLLMClient {
    /// Create a mock client that returns the given response.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            should_fail: false,
        }
    }

    /// Create a mock client that returns a well-formed planner response
    /// with exactly `n` queries named `query 1` .. `query n`.
    pub fn planning(n: usize) -> Self {
        let queries: Vec<String> = (1..=n)
            .map(|i| {
                format!(
                    r#"{{"query": "query {i}", "reasoning": "covers aspect {i}"}}"#
                )
            })
            .collect();
        Self::new(&format!(r#"{{"queries": [{}]}}"#, queries.join(", ")))
    }

    /// Create a mock client that always returns an error.
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            should_fail: true,
        }
    }

    fn respond(&self) -> Result<String> {
        if self.should_fail {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }
        Ok(self.response.clone())
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.respond()
    }

    async fn generate_with_system(&self, _system: &str, _prompt: &str) -> Result<String> {
        self.respond()
    }

    async fn generate_with_history(&self, _messages: &[(String, String)]) -> Result<String> {
        self.respond()
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Mock search provider that records when each query was issued and can
/// be configured to fail specific queries.
pub struct MockSearchProvider {
    failing_queries: HashSet<String>,
    /// Queries in the order they were issued, with their issue times.
    pub calls: Mutex<Vec<(String, tokio::time::Instant)>>,
}

impl MockSearchProvider {
    /// Create a provider where every search succeeds.
    pub fn new() -> Self {
        Self {
            failing_queries: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider where the named queries fail.
    pub fn failing_on(queries: &[&str]) -> Self {
        Self {
            failing_queries: queries.iter().map(|q| q.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Issue times recorded so far, in call order.
    pub fn recorded_calls(&self) -> Vec<(String, tokio::time::Instant)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockSearchProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(&self, query: &str) -> Result<ProviderSearchResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), tokio::time::Instant::now()));

        if self.failing_queries.contains(query) {
            return Err(AppError::Search(format!("no results for '{query}'")));
        }

        Ok(ProviderSearchResponse {
            results: vec![SearchHit {
                title: Some(format!("result for {query}")),
                url: format!("https://example.com/{}", query.replace(' ', "-")),
                highlights: Some(vec!["a highlight".to_string()]),
                summary: Some("a summary".to_string()),
            }],
            autoprompt: None,
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
