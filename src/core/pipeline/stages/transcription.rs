use crate::core::pipeline::prompts::MEDICAL_CONTEXT;
use crate::core::traits::TranscriptionProvider;
use crate::storage::StagedFile;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::within_budget;

/// Speech-to-text over a staged upload
#[derive(Clone)]
pub struct TranscriptionStage {
    provider: Arc<dyn TranscriptionProvider>,
    budget: Duration,
}

impl TranscriptionStage {
    pub fn new(provider: Arc<dyn TranscriptionProvider>, budget: Duration) -> Self {
        Self { provider, budget }
    }

    /// Transcribe the staged file, biased toward clinical vocabulary
    pub async fn transcribe(&self, file: &StagedFile) -> Result<String> {
        let audio = file.read().await?;
        let filename = file
            .path()
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("audio.wav")
            .to_string();

        debug!(bytes = audio.len(), provider = self.provider.name(), "Transcribing audio");
        let started = Instant::now();

        let text = within_budget(
            self.provider.name(),
            self.budget,
            self.provider.transcribe(audio, &filename, MEDICAL_CONTEXT),
        )
        .await?;

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            chars = text.chars().count(),
            "Transcription completed"
        );
        Ok(text)
    }
}
