use crate::core::providers::ProviderError;
use crate::core::traits::SpeechProvider;
use crate::storage::{AudioArtifactStore, StagedFile};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

use super::within_budget;

/// Text-to-speech into a new staged file
#[derive(Clone)]
pub struct SynthesisStage {
    provider: Arc<dyn SpeechProvider>,
    budget: Duration,
}

impl SynthesisStage {
    pub fn new(provider: Arc<dyn SpeechProvider>, budget: Duration) -> Self {
        Self { provider, budget }
    }

    /// Voice `text` in `language` and stage the audio in the artifact store.
    ///
    /// The returned file is plaintext and still owned by the caller.
    pub async fn synthesize(
        &self,
        text: &str,
        language: &str,
        store: &AudioArtifactStore,
    ) -> Result<StagedFile> {
        if !self.provider.supports_language(language) {
            return Err(ProviderError::unsupported_language(self.provider.name(), language).into());
        }

        let started = Instant::now();
        let speech = within_budget(
            self.provider.name(),
            self.budget,
            self.provider.synthesize(text, language),
        )
        .await?;

        let staged = store.stage(&speech.audio).await?;
        info!(
            provider = self.provider.name(),
            language = %language,
            bytes = speech.audio.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Speech synthesized"
        );
        Ok(staged)
    }
}
