//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// Chat handlers (model call + response parsing).
pub mod chat;
/// Health check handler.
pub mod health;
/// Tag parser handlers.
pub mod parse;
/// Research coordination handlers.
pub mod research;
/// Tool listing and execution handlers.
pub mod tools;
