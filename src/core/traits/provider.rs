//! Provider trait definitions
//!
//! Every remote service the gateway delegates to sits behind one of these
//! traits, so the pipeline can be wired to real HTTP clients in production and
//! to doubles in tests.

use async_trait::async_trait;

use crate::core::providers::ProviderError;
use crate::core::providers::types::{ChatMessage, SpeechResponse};

/// Speech-to-text provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    /// Provider name used in logs and errors
    fn name(&self) -> &'static str;

    /// Transcribe an audio payload, biased by `prompt`
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        filename: &str,
        prompt: &str,
    ) -> Result<String, ProviderError>;
}

/// Chat-style language model provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Run a single non-streaming completion and return the assistant text
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, ProviderError>;
}

/// Text-to-speech provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether the provider can voice text in `language`
    fn supports_language(&self, language: &str) -> bool;

    async fn synthesize(&self, text: &str, language: &str)
    -> Result<SpeechResponse, ProviderError>;
}
