//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for C.O.R.A, built on the Axum web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Chat (`/api/chat`)
//! - `POST /api/chat` - Send a message, receive the parsed assistant response
//!
//! ## Parse (`/api/parse`)
//! - `POST /api/parse` - Run raw assistant output through the tag parser
//!
//! ## Research (`/api/research`)
//! - `POST /api/research` - Plan and execute a contextual web search
//!
//! ## Tools (`/api/tools`)
//! - `GET /api/tools` - List registered tools and their argument schemas
//! - `POST /api/tools/{name}` - Execute a tool by name with JSON arguments
//!
//! ## Health (`/api/health`)
//! - `GET /api/health` - Health check endpoint

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
