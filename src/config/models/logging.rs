//! Logging configuration

use crate::utils::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
    /// Log file path; empty disables file logging
    #[serde(default = "default_log_file")]
    pub file: String,
    /// Rotate the log file after this many bytes
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
    /// Rotated files to keep
    #[serde(default = "default_max_files")]
    pub max_files: usize,
    /// JSON output on stdout
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            file: default_log_file(),
            max_file_bytes: default_max_file_bytes(),
            max_files: default_max_files(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn log_file(&self) -> Option<&Path> {
        let file = self.file.trim();
        (!file.is_empty()).then(|| Path::new(file))
    }
}

fn default_log_file() -> String {
    "app.log".to_string()
}

fn default_max_file_bytes() -> u64 {
    10 * 1024 * 1024
}

fn default_max_files() -> usize {
    5
}
