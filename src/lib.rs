//! # C.O.R.A - Contextual Research Assistant
//!
//! A research-assistant server built in Rust: it parses tag-structured
//! assistant output into reasoning, final answer, and sources, and runs
//! LLM-planned contextual web searches with parallel fan-out.
//!
//! ## Overview
//!
//! C.O.R.A can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `cora-server` binary
//! 2. **As a library** - Import components into your own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! ### Parsing a tagged reply
//!
//! ```rust
//! use cora::parser;
//!
//! let parsed = parser::parse(
//!     "<thinking>weigh the options</thinking><final_answer>Go with B.</final_answer>",
//! );
//! assert_eq!(parsed.final_answer.as_deref(), Some("Go with B."));
//! ```
//!
//! ### Running a research pass
//!
//! ```rust,ignore
//! use cora::{Provider, research::ResearchCoordinator, search::ExaClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Provider::Ollama {
//!         base_url: "http://localhost:11434".to_string(),
//!         model: "llama3.2".to_string(),
//!     };
//!     let llm: Arc<dyn cora::LLMClient> = Arc::from(provider.create_client().await?);
//!     let search = Arc::new(ExaClient::new(std::env::var("EXA_API_KEY")?));
//!
//!     let coordinator = ResearchCoordinator::new(llm, search);
//!     let outcome = coordinator
//!         .research(3, "discussing Rust async runtimes", "compare executor designs")
//!         .await;
//!     println!("{}", serde_json::to_string_pretty(&outcome)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`parser`] - Total parser for tag-structured assistant output
//! - [`research`] - Query planning, staggered fan-out, coordination
//! - [`search`] - Search provider abstraction and the Exa client
//! - [`llm`] - LLM provider clients and abstractions
//! - [`tools`] - Tool definitions and registry
//! - [`api`] - REST API handlers and routes
//! - [`types`] - Common types and error handling

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface parsing and colored output.
pub mod cli;
/// LLM provider clients and abstractions.
pub mod llm;
/// Total parser for tag-structured assistant output.
pub mod parser;
/// Query planning, staggered search fan-out, and coordination.
pub mod research;
/// Search provider abstraction and the Exa client.
pub mod search;
/// Built-in tools and the tool registry.
pub mod tools;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use llm::{LLMClient, Provider};
pub use parser::parse;
pub use research::ResearchCoordinator;
pub use search::{ExaClient, SearchProvider};
pub use tools::ToolRegistry;
pub use types::{AppError, ParsedMessage, ResearchOutcome, Result};
pub use utils::Config;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Process configuration
    pub config: Arc<Config>,
    /// LLM client used by chat and query planning
    pub llm: Arc<dyn LLMClient>,
    /// Search provider used by the executor
    pub search: Arc<dyn SearchProvider>,
    /// Tool registry exposed to the chat loop
    pub tools: Arc<ToolRegistry>,
}
