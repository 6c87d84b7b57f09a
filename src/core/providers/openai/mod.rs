//! OpenAI provider
//!
//! Serves as the transcription, language-model and (optionally) speech backend.

pub mod client;
pub mod config;
pub mod models;

pub use client::OpenAIProvider;
pub use config::OpenAIConfig;

/// Provider name used in logs and errors
pub const PROVIDER_NAME: &str = "openai";
