//! Gateway configuration validator
//!
//! Runs each section's checks and prefixes failures with the section name.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gateway configuration");

        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.auth
            .validate()
            .map_err(|e| format!("Auth config error: {}", e))?;
        self.providers
            .validate()
            .map_err(|e| format!("Provider config error: {}", e))?;
        self.pipeline
            .validate()
            .map_err(|e| format!("Pipeline config error: {}", e))?;
        self.storage
            .validate()
            .map_err(|e| format!("Storage config error: {}", e))?;

        if self.logging.log_file().is_some() && self.logging.max_file_bytes == 0 {
            return Err("Logging config error: max_file_bytes must be greater than 0".to_string());
        }

        if self.pipeline.max_audio_bytes > self.server.max_body_size {
            return Err(format!(
                "Pipeline config error: max_audio_bytes ({}) exceeds server.max_body_size ({})",
                self.pipeline.max_audio_bytes, self.server.max_body_size
            ));
        }

        debug!("Gateway configuration validation completed");
        Ok(())
    }
}
