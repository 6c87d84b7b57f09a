//! OpenAI Provider Client Implementation
//!
//! Whisper transcription, chat completions and text-to-speech over plain
//! reqwest calls.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, multipart};
use std::time::Duration;
use tracing::debug;

use super::PROVIDER_NAME;
use super::config::OpenAIConfig;
use super::models::{
    ChatCompletionRequest, ChatCompletionResponse, SpeechRequest, TranscriptionResponse,
};
use crate::core::providers::languages::normalize_speech_language;
use crate::core::providers::types::{
    ChatMessage, SpeechResponse, file_extension, format_to_content_type,
};
use crate::core::providers::ProviderError;
use crate::core::traits::{ChatProvider, SpeechProvider, TranscriptionProvider};

/// OpenAI provider
#[derive(Debug, Clone)]
pub struct OpenAIProvider {
    http: reqwest::Client,
    config: OpenAIConfig,
}

impl OpenAIProvider {
    /// Create new OpenAI provider
    pub fn new(config: OpenAIConfig) -> Result<Self, ProviderError> {
        config
            .validate()
            .map_err(|e| ProviderError::configuration(PROVIDER_NAME, e))?;

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| ProviderError::configuration(PROVIDER_NAME, e.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.get_api_base(), path)
    }

    /// Attach credential and organization headers
    fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ProviderError::authentication(PROVIDER_NAME, "API key is required"))?;

        let mut builder = builder.bearer_auth(api_key);
        if let Some(org) = &self.config.organization {
            builder = builder.header("OpenAI-Organization", org);
        }
        Ok(builder)
    }

    /// Send a request and turn non-2xx replies into errors
    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ProviderError> {
        let response = self
            .authorize(builder)?
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ProviderError::from_status(PROVIDER_NAME, status.as_u16(), &body));
        }

        Ok(response)
    }
}

#[async_trait]
impl TranscriptionProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn transcribe(
        &self,
        audio: Vec<u8>,
        filename: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let mime = file_extension(filename)
            .map(|ext| format_to_content_type(&ext))
            .unwrap_or("application/octet-stream");

        let file_part = multipart::Part::bytes(audio)
            .file_name(filename.to_string())
            .mime_str(mime)
            .map_err(|e| ProviderError::configuration(PROVIDER_NAME, format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.config.transcription_model.clone())
            .text("prompt", prompt.to_string())
            .text("response_format", "json")
            .part("file", file_part);

        debug!(model = %self.config.transcription_model, "Sending audio to OpenAI transcription API");

        let response = self
            .execute(self.http.post(self.url("/audio/transcriptions")).multipart(form))
            .await?;

        let parsed: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::response_parsing(PROVIDER_NAME, e.to_string()))?;

        Ok(parsed.text.trim().to_string())
    }
}

#[async_trait]
impl ChatProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, ProviderError> {
        let body = ChatCompletionRequest {
            model: &self.config.chat_model,
            messages: &messages,
        };

        debug!(model = %self.config.chat_model, messages = messages.len(), "Sending chat completion");

        let response = self
            .execute(self.http.post(self.url("/chat/completions")).json(&body))
            .await?;

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::response_parsing(PROVIDER_NAME, e.to_string()))?;

        parsed
            .first_content()
            .map(|content| content.trim().to_string())
            .ok_or_else(|| ProviderError::response_parsing(PROVIDER_NAME, "completion had no content"))
    }
}

#[async_trait]
impl SpeechProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn supports_language(&self, language: &str) -> bool {
        normalize_speech_language(language).is_some()
    }

    async fn synthesize(
        &self,
        text: &str,
        language: &str,
    ) -> Result<SpeechResponse, ProviderError> {
        // The model infers language from the text; the code only gates support
        if !self.supports_language(language) {
            return Err(ProviderError::unsupported_language(PROVIDER_NAME, language));
        }

        let body = SpeechRequest {
            model: &self.config.speech_model,
            input: text,
            voice: &self.config.voice,
            response_format: "mp3",
        };

        let response = self
            .execute(self.http.post(self.url("/audio/speech")).json(&body))
            .await?;

        let audio = response
            .bytes()
            .await
            .map_err(|e| ProviderError::network(PROVIDER_NAME, e.to_string()))?;

        Ok(SpeechResponse {
            audio: audio.to_vec(),
            content_type: format_to_content_type("mp3").to_string(),
        })
    }
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::timeout(PROVIDER_NAME, err.to_string())
    } else {
        ProviderError::network(PROVIDER_NAME, err.to_string())
    }
}
