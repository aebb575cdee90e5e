//! Exa search API client.
//!
//! Issues `POST {base}/search` with the fixed shaping configuration
//! (result count, highlights, summary) and normalizes the response into
//! [`ProviderSearchResponse`]. Missing titles, highlights, summaries, or
//! the autoprompt string are optional-field absences, not failures.

use crate::search::provider::{ProviderSearchResponse, SearchProvider};
use crate::search::{HIGHLIGHTS_PER_URL, HIGHLIGHT_SENTENCES, NUM_RESULTS};
use crate::types::{AppError, Result, SearchHit};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.exa.ai";

/// Client for the Exa search API.
pub struct ExaClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ExaClient {
    /// Create a client against the production Exa endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (test servers, proxies).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    fn request_body(query: &str) -> ExaSearchRequest {
        ExaSearchRequest {
            query: query.to_string(),
            num_results: NUM_RESULTS,
            search_type: "auto".to_string(),
            use_autoprompt: true,
            contents: ExaContents {
                highlights: ExaHighlights {
                    num_sentences: HIGHLIGHT_SENTENCES,
                    highlights_per_url: HIGHLIGHTS_PER_URL,
                },
                summary: true,
            },
        }
    }
}

#[async_trait]
impl SearchProvider for ExaClient {
    async fn search(&self, query: &str) -> Result<ProviderSearchResponse> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&Self::request_body(query))
            .send()
            .await
            .map_err(|e| AppError::Search(format!("Exa request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Search(format!(
                "Exa returned HTTP {} for query",
                status.as_u16()
            )));
        }

        let body: ExaSearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Search(format!("Exa response parse error: {}", e)))?;

        Ok(ProviderSearchResponse {
            results: body
                .results
                .into_iter()
                .map(|result| SearchHit {
                    title: result.title,
                    url: result.url,
                    highlights: result.highlights,
                    summary: result.summary,
                })
                .collect(),
            autoprompt: body.autoprompt_string,
        })
    }

    fn name(&self) -> &str {
        "exa"
    }
}

// ============= Wire Types =============

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaSearchRequest {
    query: String,
    num_results: u32,
    #[serde(rename = "type")]
    search_type: String,
    use_autoprompt: bool,
    contents: ExaContents,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaContents {
    highlights: ExaHighlights,
    summary: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaHighlights {
    num_sentences: u32,
    highlights_per_url: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExaSearchResponse {
    #[serde(default)]
    results: Vec<ExaResult>,
    #[serde(default)]
    autoprompt_string: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExaResult {
    #[serde(default)]
    title: Option<String>,
    url: String,
    #[serde(default)]
    highlights: Option<Vec<String>>,
    #[serde(default)]
    summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_fixed_shaping_config() {
        let body = serde_json::to_value(ExaClient::request_body("rust async")).unwrap();

        assert_eq!(body["query"], "rust async");
        assert_eq!(body["numResults"], 5);
        assert_eq!(body["type"], "auto");
        assert_eq!(body["useAutoprompt"], true);
        assert_eq!(body["contents"]["highlights"]["numSentences"], 3);
        assert_eq!(body["contents"]["highlights"]["highlightsPerUrl"], 4);
        assert_eq!(body["contents"]["summary"], true);
    }

    #[test]
    fn response_tolerates_missing_optional_fields() {
        let body: ExaSearchResponse = serde_json::from_str(
            r#"{"results": [{"url": "https://a.com"}]}"#,
        )
        .unwrap();

        assert_eq!(body.results.len(), 1);
        assert!(body.results[0].title.is_none());
        assert!(body.autoprompt_string.is_none());
    }
}
