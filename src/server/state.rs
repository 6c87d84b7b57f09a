//! Application state shared across HTTP handlers

use crate::auth::ApiKeyGate;
use crate::config::Config;
use crate::core::pipeline::{ClinicalPipeline, PipelineProviders};
use crate::storage::{AudioArtifactStore, StagingArea};
use crate::utils::auth::AudioCipher;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// HTTP server state shared across handlers
///
/// Everything in here is read-only after startup. The allow-list and the
/// audio key live behind `Arc`s inside [`ApiKeyGate`] and [`AudioCipher`],
/// so cloning the state per worker is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Allow-list of client API keys
    pub gate: ApiKeyGate,
    /// Speech and translation flows
    pub pipeline: Arc<ClinicalPipeline>,
}

impl AppState {
    pub fn new(config: Config, gate: ApiKeyGate, pipeline: ClinicalPipeline) -> Self {
        Self {
            config: Arc::new(config),
            gate,
            pipeline: Arc::new(pipeline),
        }
    }

    /// Build the gate, storage and providers described by `config`.
    ///
    /// A fresh audio key is generated on every call, so artifacts sealed by
    /// an earlier process cannot be opened by this one.
    pub async fn from_config(config: Config) -> Result<Self> {
        let gate = ApiKeyGate::new(&config.auth().api_keys)?;
        let providers = PipelineProviders::from_config(config.providers())?;
        Self::with_providers(config, gate, providers).await
    }

    /// Like [`AppState::from_config`] but with caller-supplied providers
    pub async fn with_providers(
        config: Config,
        gate: ApiKeyGate,
        providers: PipelineProviders,
    ) -> Result<Self> {
        let cipher = AudioCipher::generate();
        info!("Generated per-process audio encryption key");

        let staging = StagingArea::new(config.storage().staging_dir.clone()).await?;
        let artifacts = AudioArtifactStore::new(config.storage().artifact_dir.clone(), cipher).await?;
        let pipeline = ClinicalPipeline::new(
            providers,
            &config.pipeline().timeouts,
            staging,
            artifacts,
        );

        Ok(Self::new(config, gate, pipeline))
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
