//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the server from a loaded configuration and run it until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!(
        version = crate::VERSION,
        git_hash = crate::GIT_HASH,
        "Starting medtalk gateway"
    );

    let server = ServerBuilder::new().with_config(config).build().await?;

    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /speech-to-text/ - Transcribe and enhance a recording");
    info!("   POST /translate/ - Translate text and synthesize speech");
    info!("   GET  /audio/{{id}} - Download synthesized audio");

    server.start().await
}
