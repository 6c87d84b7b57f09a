//! Remote AI provider implementations
//!
//! Transcription and language-model calls go to OpenAI; speech synthesis goes
//! to Google Translate or OpenAI depending on configuration.

pub mod error;
pub mod google_tts;
pub mod languages;
pub mod openai;
pub mod types;

pub use error::ProviderError;
pub use google_tts::{GoogleTranslateTts, GoogleTtsConfig};
pub use openai::{OpenAIConfig, OpenAIProvider};
pub use types::{ChatMessage, ChatRole, SpeechResponse};
