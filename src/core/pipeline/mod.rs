//! Clinical request pipeline
//!
//! Two linear flows over the provider stages:
//! - speech-to-text: stage upload, transcribe, release upload, enhance
//! - translate: translate, synthesize, encrypt, register artifact
//!
//! Every stage result is an explicit `Result`; provider failures are logged
//! here in sanitized form and handed to the HTTP layer, which replaces them
//! with a generic message.

pub mod prompts;
pub mod stages;
pub mod types;

pub use types::{TranslationOutcome, TranslationRequest};

use crate::config::{ProvidersConfig, SpeechBackend, StageTimeouts};
use crate::core::providers::types::file_extension;
use crate::core::providers::{GoogleTranslateTts, OpenAIProvider};
use crate::core::traits::{ChatProvider, SpeechProvider, TranscriptionProvider};
use crate::storage::{AudioArtifactStore, StagingArea};
use crate::utils::error::{GatewayError, Result};
use crate::utils::logging::Sanitization;
use stages::{EnhancementStage, SynthesisStage, TranscriptionStage, TranslationStage};
use std::sync::Arc;
use tracing::{error, info};

/// Upload suffix used when the client sends no usable filename
const DEFAULT_UPLOAD_SUFFIX: &str = "wav";

/// The providers each stage delegates to
#[derive(Clone)]
pub struct PipelineProviders {
    pub transcription: Arc<dyn TranscriptionProvider>,
    pub chat: Arc<dyn ChatProvider>,
    pub speech: Arc<dyn SpeechProvider>,
}

impl PipelineProviders {
    /// Build the HTTP-backed providers from configuration
    pub fn from_config(config: &ProvidersConfig) -> Result<Self> {
        let openai = Arc::new(OpenAIProvider::new(config.openai.clone())?);

        let speech: Arc<dyn SpeechProvider> = match config.speech.provider {
            SpeechBackend::GoogleTranslate => {
                Arc::new(GoogleTranslateTts::new(config.speech.google.clone())?)
            }
            SpeechBackend::Openai => openai.clone(),
        };

        info!(
            transcription = openai.config().transcription_model.as_str(),
            chat = openai.config().chat_model.as_str(),
            speech = speech.name(),
            "Providers configured"
        );

        Ok(Self {
            transcription: openai.clone(),
            chat: openai,
            speech,
        })
    }
}

/// Orchestrates the speech-to-text and translate flows
#[derive(Clone)]
pub struct ClinicalPipeline {
    transcription: TranscriptionStage,
    enhancement: EnhancementStage,
    translation: TranslationStage,
    synthesis: SynthesisStage,
    staging: StagingArea,
    artifacts: AudioArtifactStore,
}

impl ClinicalPipeline {
    pub fn new(
        providers: PipelineProviders,
        timeouts: &StageTimeouts,
        staging: StagingArea,
        artifacts: AudioArtifactStore,
    ) -> Self {
        Self {
            transcription: TranscriptionStage::new(
                providers.transcription,
                timeouts.transcription(),
            ),
            enhancement: EnhancementStage::new(providers.chat.clone(), timeouts.enhancement()),
            translation: TranslationStage::new(providers.chat, timeouts.translation()),
            synthesis: SynthesisStage::new(providers.speech, timeouts.synthesis()),
            staging,
            artifacts,
        }
    }

    /// Transcribe uploaded audio and enhance the transcript.
    ///
    /// The staged upload is deleted before this returns, on every path.
    pub async fn speech_to_text(&self, audio: &[u8], filename: Option<&str>) -> Result<String> {
        let suffix = filename
            .and_then(file_extension)
            .unwrap_or_else(|| DEFAULT_UPLOAD_SUFFIX.to_string());

        let staged = self.staging.stage(audio, &suffix).await.inspect_err(|e| {
            log_stage_failure("staging", e);
        })?;

        let transcript = self.transcription.transcribe(&staged).await;
        staged.release().await;

        let transcript = transcript.inspect_err(|e| log_stage_failure("transcription", e))?;
        Ok(self.enhancement.enhance(&transcript).await)
    }

    /// Translate text, voice the translation and seal the audio.
    ///
    /// No audio is produced when translation fails; when encryption fails the
    /// synthesized file is deleted.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<TranslationOutcome> {
        let translated_text = self
            .translation
            .translate(request)
            .await
            .inspect_err(|e| log_stage_failure("translation", e))?;

        let staged = self
            .synthesis
            .synthesize(&translated_text, &request.target_lang, &self.artifacts)
            .await
            .inspect_err(|e| log_stage_failure("synthesis", e))?;

        let audio = self
            .artifacts
            .seal(staged)
            .await
            .inspect_err(|e| log_stage_failure("encryption", e))?;

        info!(audio_id = %audio.id, "Translation audio sealed");
        Ok(TranslationOutcome {
            translated_text,
            audio,
        })
    }

    /// Decrypt a previously sealed translation audio
    pub async fn fetch_audio(&self, id: &str) -> Result<Vec<u8>> {
        self.artifacts.open(id).await
    }
}

fn log_stage_failure(stage: &'static str, err: &GatewayError) {
    error!(
        stage,
        timeout = err.is_timeout(),
        error = %Sanitization::sanitize_for_log(&err.to_string()),
        "Pipeline stage failed"
    );
}
