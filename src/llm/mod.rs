//! LLM Provider Clients and Abstractions
//!
//! A unified interface over the language-model providers C.O.R.A can use
//! for query planning and chat turns. Provider specifics stay behind
//! [`LLMClient`]; the rest of the crate only depends on that trait, so a
//! test can substitute a scripted fake for the real backing call.
//!
//! # Supported Providers
//!
//! - OpenAI API and compatible endpoints (including OpenRouter for
//!   Claude-family models)
//! - Ollama for local inference
//!
//! # Example
//!
//! ```ignore
//! use cora::llm::{LLMClient, Provider};
//!
//! let provider = Provider::Ollama {
//!     base_url: "http://localhost:11434".to_string(),
//!     model: "llama3.2".to_string(),
//! };
//! let client = provider.create_client().await?;
//! let response = client.generate("Hello, world!").await?;
//! ```

/// Core LLM client trait and provider selection.
pub mod client;
/// Ollama local inference client.
pub mod ollama;
/// OpenAI chat-completions client.
pub mod openai;

pub use client::{LLMClient, Provider};
