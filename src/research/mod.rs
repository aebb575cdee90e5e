//! Contextual Research Orchestration
//!
//! Turns a loosely specified information need into a bounded, parallel,
//! fault-tolerant batch of web searches:
//!
//! 1. **Planning** - [`planner::QueryPlanner`] asks the LLM for exactly N
//!    distinct queries with rationale (N is caller-supplied, 2-6).
//! 2. **Execution** - [`executor::SearchExecutor`] fans the queries out as
//!    independent tasks with staggered starts; a failing query becomes a
//!    value in its slot, never an abort of the batch.
//! 3. **Assembly** - [`coordinator::ResearchCoordinator`] composes the two
//!    and reports either a full result with metadata or a single
//!    structured error.
//!
//! Lifecycle per invocation: `Idle -> Planning -> Executing -> Completed`,
//! or `Idle -> Planning -> Failed` when planning fails. Partial per-query
//! failure still completes. An invocation owns all its values; nothing is
//! cached or retried across invocations, and repeated calls may return
//! different results as the external index changes.
//!
//! # Example
//!
//! ```ignore
//! use cora::research::coordinator::ResearchCoordinator;
//!
//! let coordinator = ResearchCoordinator::new(llm, search);
//! let outcome = coordinator
//!     .research(3, "discussing Rust async runtimes", "compare tokio and smol")
//!     .await;
//! ```

/// Planner-executor composition and outcome assembly.
pub mod coordinator;
/// Staggered parallel query execution with per-item fault isolation.
pub mod executor;
/// Constrained-count query generation.
pub mod planner;

pub use coordinator::ResearchCoordinator;
pub use executor::{SearchExecutor, STAGGER_STEP};
pub use planner::{QueryPlanner, MAX_QUERIES, MIN_QUERIES};
