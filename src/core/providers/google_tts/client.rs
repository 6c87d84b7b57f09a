//! Google Translate speech client
//!
//! Fetches MP3 audio from the public `translate_tts` endpoint. Long text is
//! sent in chunks and the returned MP3 frames are concatenated.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::PROVIDER_NAME;
use super::chunking::split_text;
use super::config::GoogleTtsConfig;
use crate::core::providers::ProviderError;
use crate::core::providers::languages::normalize_speech_language;
use crate::core::providers::types::{SpeechResponse, format_to_content_type};
use crate::core::traits::SpeechProvider;

/// Google Translate text-to-speech provider
#[derive(Debug, Clone)]
pub struct GoogleTranslateTts {
    http: reqwest::Client,
    config: GoogleTtsConfig,
}

impl GoogleTranslateTts {
    pub fn new(config: GoogleTtsConfig) -> Result<Self, ProviderError> {
        config
            .validate()
            .map_err(|e| ProviderError::configuration(PROVIDER_NAME, e))?;

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| ProviderError::configuration(PROVIDER_NAME, e.to_string()))?;

        Ok(Self { http, config })
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: &str,
        idx: usize,
        total: usize,
    ) -> Result<bytes::Bytes, ProviderError> {
        let idx = idx.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();
        let speed = if self.config.slow { "0.3" } else { "1" };

        let response = self
            .http
            .get(self.config.endpoint())
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", language),
                ("client", "tw-ob"),
                ("idx", idx.as_str()),
                ("total", total.as_str()),
                ("textlen", textlen.as_str()),
                ("ttsspeed", speed),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::timeout(PROVIDER_NAME, e.to_string())
                } else {
                    ProviderError::network(PROVIDER_NAME, e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(PROVIDER_NAME, status.as_u16(), &body));
        }

        response
            .bytes()
            .await
            .map_err(|e| ProviderError::network(PROVIDER_NAME, e.to_string()))
    }
}

#[async_trait]
impl SpeechProvider for GoogleTranslateTts {
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
        let language = normalize_speech_language(language)
            .ok_or_else(|| ProviderError::unsupported_language(PROVIDER_NAME, language))?;

        let chunks = split_text(text, self.config.max_chunk_chars);
        if chunks.is_empty() {
            return Err(ProviderError::configuration(PROVIDER_NAME, "No text to speak"));
        }

        debug!(language = %language, chunks = chunks.len(), "Requesting Google speech synthesis");

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let frames = self.fetch_chunk(chunk, &language, idx, chunks.len()).await?;
            audio.extend_from_slice(&frames);
        }

        if audio.is_empty() {
            return Err(ProviderError::response_parsing(PROVIDER_NAME, "Empty audio returned"));
        }

        Ok(SpeechResponse {
            audio,
            content_type: format_to_content_type("mp3").to_string(),
        })
    }
}
