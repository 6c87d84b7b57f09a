//! Storage configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Local storage directories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Where uploaded audio is staged for the duration of a request
    #[serde(default = "default_staging_dir")]
    pub staging_dir: PathBuf,
    /// Where encrypted synthesized audio is kept
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            staging_dir: default_staging_dir(),
            artifact_dir: default_artifact_dir(),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.staging_dir.as_os_str().is_empty() {
            return Err("storage.staging_dir cannot be empty".to_string());
        }
        if self.artifact_dir.as_os_str().is_empty() {
            return Err("storage.artifact_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

fn default_staging_dir() -> PathBuf {
    std::env::temp_dir().join("medtalk-gateway").join("staging")
}

fn default_artifact_dir() -> PathBuf {
    PathBuf::from("data/audio")
}
