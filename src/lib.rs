//! # medtalk-gateway
//!
//! HTTP gateway for clinical conversations across a language barrier. It
//! accepts recorded speech or typed text from a clinical front-end, forwards
//! it to cloud speech-to-text, language-model and text-to-speech providers,
//! and returns transcripts, translations and encrypted synthesized audio.
//!
//! ## Endpoints
//!
//! - `POST /speech-to-text/`: multipart `audio` field, returns the
//!   transcript after medical-terminology enhancement
//! - `POST /translate/`: form fields `text`, `source_lang`, `target_lang`,
//!   returns the translation and a link to its spoken audio
//! - `GET /audio/{id}`: decrypted audio for a previous translation
//! - `GET /health`: liveness probe
//!
//! Every endpoint except `/health` requires an `X-API-Key` header from the
//! configured allow-list.
//!
//! ## Running
//!
//! ```rust,no_run
//! use medtalk_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None).await?;
//!     let gateway = Gateway::new(config).await?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::pipeline::{ClinicalPipeline, TranslationOutcome, TranslationRequest};
pub use core::providers::ProviderError;
pub use utils::error::{GatewayError, Result};

use tracing::info;

/// The gateway: configuration plus a ready-to-start HTTP server
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting medtalk gateway");
        info!("Configuration: {:#?}", self.config);

        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
/// Git commit the binary was built from
pub const GIT_HASH: &str = env!("GIT_HASH");
/// Build time, seconds since the Unix epoch
pub const BUILD_TIME: &str = env!("BUILD_TIME");
/// Compiler that produced the binary
pub const RUST_VERSION: &str = env!("RUST_VERSION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: BUILD_TIME,
            git_hash: GIT_HASH,
            rust_version: RUST_VERSION,
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
