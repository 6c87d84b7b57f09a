//! Utility modules for the gateway
//!
//! - **auth**: audio encryption and key hashing
//! - **error**: error types and HTTP error mapping
//! - **logging**: subscriber setup, log rotation and sanitization

pub mod auth;
pub mod error;
pub mod logging;

use uuid::Uuid;

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
