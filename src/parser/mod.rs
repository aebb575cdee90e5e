//! Structured-Tag Response Parsing
//!
//! Assistant responses follow a fixed tag protocol:
//!
//! - `<thinking>` / `<stress_test>` spans carry internal deliberation,
//!   optionally suffixed with an iteration number (`<thinking_2>`);
//! - `<final_answer>` spans carry the user-facing answer (repeatable,
//!   concatenated in document order);
//! - a single `<sources>` span lists citations as `- <url> <title?>`
//!   bullet lines.
//!
//! [`parse`] extracts that structure into a [`ParsedMessage`](crate::types::ParsedMessage).
//! It is total: any input, however malformed or partially delimited,
//! produces a message - in the worst case the whole input degrades into
//! the final answer with tag markers stripped. Display of the result is a
//! presentation concern and lives outside this crate.
//!
//! # Example
//!
//! ```
//! use cora::parser::parse;
//!
//! let message = parse("<thinking>check the docs</thinking><final_answer>Done.</final_answer>");
//! assert_eq!(message.final_answer.as_deref(), Some("Done."));
//! assert_eq!(message.reasoning.len(), 1);
//! ```

/// Scanner over tag-delimited message spans.
pub mod message;

pub use message::parse;
