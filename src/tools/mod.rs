//! Tools Invocable from the Conversation Loop
//!
//! The hosting conversational loop invokes tools mid-conversation through
//! the [`registry::ToolRegistry`]. C.O.R.A ships a single tool:
//!
//! - [`contextual_search`](crate::tools::contextual_search) - plans and
//!   runs a bounded batch of web searches via the research coordinator.
//!
//! Tool results are always serializable values: a total research failure
//! comes back as `{"error": "..."}`, never as a fault the loop has to
//! guard against.

/// Contextual web-search tool backed by the research coordinator.
pub mod contextual_search;
/// Tool registration and dispatch.
pub mod registry;

pub use contextual_search::ContextualSearchTool;
pub use registry::{Tool, ToolRegistry};
