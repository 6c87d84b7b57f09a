//! medtalk-gateway - clinical speech and translation gateway

#![allow(missing_docs)]

use clap::Parser;
use medtalk_gateway::config::Config;
use medtalk_gateway::server;
use medtalk_gateway::utils::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

/// Clinical speech and translation gateway
#[derive(Debug, Parser)]
#[command(name = "gateway", version, about)]
struct Args {
    /// Path to the YAML configuration file (defaults to config/gateway.yaml when present)
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display, not Debug, so bind errors keep their layout
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
