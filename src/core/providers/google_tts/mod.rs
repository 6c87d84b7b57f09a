//! Google Translate text-to-speech provider

pub mod chunking;
pub mod client;
pub mod config;

pub use client::GoogleTranslateTts;
pub use config::GoogleTtsConfig;

/// Provider name used in logs and errors
pub const PROVIDER_NAME: &str = "google_tts";
