//! Configuration management for the Gateway
//!
//! Configuration is read from a YAML file, then overridden from the
//! environment, then validated. Startup aborts on an invalid configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Main configuration struct for the Gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file, without environment overrides or validation
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let gateway: GatewayConfig = serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(Self { gateway })
    }

    /// Load, apply environment overrides and validate.
    ///
    /// An explicitly given file must exist. Without one, the default path is
    /// used when present and built-in defaults otherwise.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path).await?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH).await?
            }
            None => {
                info!(
                    "No configuration file at {}, using defaults and environment",
                    DEFAULT_CONFIG_PATH
                );
                Self::default()
            }
        };

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from process environment variables
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Apply overrides using an arbitrary variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let gateway = &mut self.gateway;

        if let Some(host) = lookup("GATEWAY_HOST") {
            gateway.server.host = host;
        }
        if let Some(port) = lookup("GATEWAY_PORT").and_then(|p| p.trim().parse().ok()) {
            gateway.server.port = port;
        }
        if let Some(keys) = lookup("GATEWAY_API_KEYS") {
            gateway.auth.set_keys_from_list(&keys);
        }

        gateway.providers.openai.apply_env_from(&lookup);

        if let Some(dir) = lookup("GATEWAY_STAGING_DIR") {
            gateway.storage.staging_dir = dir.into();
        }
        if let Some(dir) = lookup("GATEWAY_ARTIFACT_DIR") {
            gateway.storage.artifact_dir = dir.into();
        }

        if let Some(level) = lookup("LOG_LEVEL").and_then(|l| l.parse().ok()) {
            gateway.logging.level = level;
        }
        if let Some(file) = lookup("LOG_FILE") {
            gateway.logging.file = file;
        }

        debug!("Environment overrides applied");
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.gateway.auth
    }

    /// Get providers configuration
    pub fn providers(&self) -> &ProvidersConfig {
        &self.gateway.providers
    }

    /// Get pipeline configuration
    pub fn pipeline(&self) -> &PipelineConfig {
        &self.gateway.pipeline
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.gateway.storage
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.gateway.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(&self.gateway).map_err(GatewayError::Config)
    }
}
