//! Global tracing subscriber setup

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::utils::RotatingFileWriter;
use crate::config::models::logging::LoggingConfig;
use crate::utils::error::{GatewayError, Result};

/// Install the global subscriber: stdout (plain or JSON) plus the rotating
/// log file when one is configured. `RUST_LOG` overrides the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()));

    let stdout_json = config.json.then(|| fmt::layer().json().with_target(true));
    let stdout_plain = (!config.json).then(|| fmt::layer().with_target(false));

    let file_layer = match config.log_file() {
        Some(path) => {
            let writer = RotatingFileWriter::open(path, config.max_file_bytes, config.max_files)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(move || writer.clone()),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_json)
        .with(stdout_plain)
        .with(file_layer)
        .try_init()
        .map_err(|e| GatewayError::internal(format!("Failed to initialize logging: {}", e)))?;

    info!(
        level = config.level.as_directive(),
        file = ?config.log_file(),
        json = config.json,
        "Logging initialized"
    );
    Ok(())
}
