//! HTTP middleware implementations
//!
//! - API key enforcement on protected resources
//! - Request ID tracking

mod auth;
mod helpers;
mod request_id;


pub use auth::{ApiKeyAuth, ApiKeyAuthService};
pub use helpers::{REQUEST_ID_HEADER, extract_api_key, incoming_request_id};
pub use request_id::{RequestId, RequestIdMiddleware, RequestIdMiddlewareService};
