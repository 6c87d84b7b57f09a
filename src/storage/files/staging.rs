//! Ephemeral on-disk staging of request audio

use crate::utils::error::{GatewayError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Directory holding per-request staged files
#[derive(Debug, Clone)]
pub struct StagingArea {
    base_path: PathBuf,
}

impl StagingArea {
    /// Create the staging area, creating the directory if needed
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let path = base_path.into();

        fs::create_dir_all(&path).await.map_err(|e| {
            GatewayError::FileStorage(format!("Failed to create staging directory: {}", e))
        })?;

        info!("Staging area initialized at: {}", path.display());
        Ok(Self { base_path: path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Write `content` to a new uniquely named file and return its owning handle
    pub async fn stage(&self, content: &[u8], suffix: &str) -> Result<StagedFile> {
        let id = Uuid::new_v4();
        let path = self
            .base_path
            .join(format!("{}.{}", id, sanitize_suffix(suffix)));

        // Arm the handle before writing so a partial write is still cleaned up
        let staged = StagedFile {
            id,
            path,
            armed: true,
        };

        fs::write(&staged.path, content)
            .await
            .map_err(|e| GatewayError::FileStorage(format!("Failed to write staged file: {}", e)))?;

        debug!(file_id = %id, bytes = content.len(), "Staged file");
        Ok(staged)
    }

    /// Path a staged file with this id and suffix would have
    pub fn path_for(&self, id: &Uuid, suffix: &str) -> PathBuf {
        self.base_path
            .join(format!("{}.{}", id, sanitize_suffix(suffix)))
    }
}

/// A staged file owned by exactly one request.
///
/// The file is removed by [`StagedFile::release`], or on drop if neither
/// `release` nor [`StagedFile::persist`] was called.
#[derive(Debug)]
pub struct StagedFile {
    id: Uuid,
    path: PathBuf,
    armed: bool,
}

impl StagedFile {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> Result<Vec<u8>> {
        fs::read(&self.path)
            .await
            .map_err(|e| GatewayError::FileStorage(format!("Failed to read staged file: {}", e)))
    }

    /// Delete the file. Failures are logged, not returned.
    pub async fn release(mut self) {
        self.armed = false;
        match fs::remove_file(&self.path).await {
            Ok(()) => debug!(file_id = %self.id, "Released staged file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(file_id = %self.id, error = %e, "Failed to delete staged file"),
        }
    }

    /// Keep the file on disk and hand its path to the caller
    pub fn persist(mut self) -> PathBuf {
        self.armed = false;
        std::mem::take(&mut self.path)
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        // Last-resort cleanup after an early return or panic. This is a
        // blocking unlink on the worker thread; normal paths use `release`.
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(file_id = %self.id, "Released staged file on drop"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(file_id = %self.id, error = %e, "Failed to delete staged file"),
        }
    }
}

/// Keep suffixes to a short alphanumeric extension
fn sanitize_suffix(suffix: &str) -> String {
    let cleaned: String = suffix
        .trim_start_matches('.')
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(8)
        .collect::<String>()
        .to_lowercase();

    if cleaned.is_empty() {
        "bin".to_string()
    } else {
        cleaned
    }
}
