//! Caller authentication
//!
//! A fixed allow-list of API keys loaded from configuration.

pub mod api_key;

pub use api_key::{API_KEY_HEADER, ApiKeyGate};
