//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod auth;
pub mod gateway;
pub mod logging;
pub mod pipeline;
pub mod provider;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use auth::*;
pub use gateway::*;
pub use logging::*;
pub use pipeline::*;
pub use provider::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    30 * 1024 * 1024 // 30MB, room for a 25MB upload plus multipart framing
}

/// Default maximum audio upload in bytes
pub fn default_max_audio_bytes() -> usize {
    25 * 1024 * 1024 // Whisper's upload limit
}
