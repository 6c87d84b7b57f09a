use crate::core::pipeline::prompts::translation_messages;
use crate::core::pipeline::types::TranslationRequest;
use crate::core::providers::ProviderError;
use crate::core::traits::ChatProvider;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

use super::within_budget;

/// Language-model translation with clinical context
#[derive(Clone)]
pub struct TranslationStage {
    provider: Arc<dyn ChatProvider>,
    budget: Duration,
}

impl TranslationStage {
    pub fn new(provider: Arc<dyn ChatProvider>, budget: Duration) -> Self {
        Self { provider, budget }
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let started = Instant::now();
        let messages =
            translation_messages(&request.text, &request.source_lang, &request.target_lang);

        let translated = within_budget(
            self.provider.name(),
            self.budget,
            self.provider.complete(messages),
        )
        .await?;

        if translated.trim().is_empty() {
            return Err(
                ProviderError::response_parsing(self.provider.name(), "empty translation").into(),
            );
        }

        info!(
            source_lang = %request.source_lang,
            target_lang = %request.target_lang,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Translation completed"
        );
        Ok(translated)
    }
}
