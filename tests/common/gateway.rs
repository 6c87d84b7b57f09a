//! Gateway factory for integration tests
//!
//! Every provider points at one wiremock server and every directory is a
//! fresh `TempDir`, so tests can run in parallel.

use super::fixtures::API_KEY;
use super::providers::OPENAI_KEY;
use actix_web::web;
use medtalk_gateway::config::{Config, SpeechBackend};
use medtalk_gateway::server::AppState;
use std::path::Path;
use tempfile::TempDir;
use wiremock::MockServer;

/// Gateway state plus the directories it writes to
pub struct TestGateway {
    pub staging_dir: TempDir,
    pub artifact_dir: TempDir,
    pub state: web::Data<AppState>,
}

impl TestGateway {
    /// Gateway with default settings talking to `server`
    pub async fn start(server: &MockServer) -> Self {
        Self::start_with(server, |_| {}).await
    }

    /// Gateway talking to `server`, with `customize` applied to the config
    pub async fn start_with<F>(server: &MockServer, customize: F) -> Self
    where
        F: FnOnce(&mut Config),
    {
        let staging_dir = TempDir::new().unwrap();
        let artifact_dir = TempDir::new().unwrap();

        let mut config = Config::default();
        let gateway = &mut config.gateway;
        gateway.auth.api_keys = vec![API_KEY.to_string(), "second-clinic-key".to_string()];
        gateway.providers.openai.api_key = Some(OPENAI_KEY.to_string());
        gateway.providers.openai.api_base = server.uri();
        gateway.providers.speech.provider = SpeechBackend::GoogleTranslate;
        gateway.providers.speech.google.base_url = server.uri();
        gateway.storage.staging_dir = staging_dir.path().to_path_buf();
        gateway.storage.artifact_dir = artifact_dir.path().to_path_buf();

        customize(&mut config);
        config.validate().unwrap();

        let state = AppState::from_config(config).await.unwrap();

        Self {
            staging_dir,
            artifact_dir,
            state: web::Data::new(state),
        }
    }

    /// Files currently staged
    pub fn staged_files(&self) -> usize {
        count_files(self.staging_dir.path())
    }

    /// Files currently in the artifact directory
    pub fn artifact_files(&self) -> usize {
        count_files(self.artifact_dir.path())
    }
}

fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}
