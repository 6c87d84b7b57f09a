//! Encrypted audio artifacts addressed by id

use crate::utils::auth::crypto::AudioCipher;
use crate::utils::error::{GatewayError, Result};
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use super::staging::{StagedFile, StagingArea};

/// Extension of synthesized audio files
const ARTIFACT_SUFFIX: &str = "mp3";

/// Reference to a sealed artifact, safe to hand to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AudioArtifact {
    pub id: Uuid,
}

impl AudioArtifact {
    /// Gated retrieval URL
    pub fn url(&self) -> String {
        format!("/audio/{}", self.id)
    }
}

/// Store of generated audio, encrypted at rest under the process key
#[derive(Debug, Clone)]
pub struct AudioArtifactStore {
    area: StagingArea,
    cipher: AudioCipher,
}

impl AudioArtifactStore {
    pub async fn new(base_path: impl Into<std::path::PathBuf>, cipher: AudioCipher) -> Result<Self> {
        Ok(Self {
            area: StagingArea::new(base_path).await?,
            cipher,
        })
    }

    pub fn base_path(&self) -> &Path {
        self.area.base_path()
    }

    /// Write plaintext audio into the store's directory, not yet sealed
    pub async fn stage(&self, audio: &[u8]) -> Result<StagedFile> {
        self.area.stage(audio, ARTIFACT_SUFFIX).await
    }

    /// Encrypt a staged file in place and keep it.
    ///
    /// On failure the plaintext file is deleted.
    pub async fn seal(&self, file: StagedFile) -> Result<AudioArtifact> {
        if let Err(e) = self.cipher.encrypt_in_place(file.path()).await {
            file.release().await;
            return Err(e);
        }

        let artifact = AudioArtifact { id: file.id() };
        file.persist();
        debug!(audio_id = %artifact.id, "Sealed audio artifact");
        Ok(artifact)
    }

    /// Load and decrypt an artifact.
    ///
    /// Unknown or malformed ids are `NotFound`; artifacts this process cannot
    /// decrypt (sealed under an earlier key) are `Gone`.
    pub async fn open(&self, id: &str) -> Result<Vec<u8>> {
        let id = Uuid::parse_str(id)
            .map_err(|_| GatewayError::not_found("Audio not found"))?;
        let path = self.area.path_for(&id, ARTIFACT_SUFFIX);

        let sealed = match fs::read(&path).await {
            Ok(sealed) => sealed,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(GatewayError::not_found("Audio not found"));
            }
            Err(e) => {
                return Err(GatewayError::FileStorage(format!(
                    "Failed to read audio artifact: {}",
                    e
                )));
            }
        };

        self.cipher.decrypt(&sealed).map_err(|_| {
            warn!(audio_id = %id, "Audio artifact cannot be decrypted with the current key");
            GatewayError::gone("Audio is no longer available")
        })
    }
}
