//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

pub mod middleware;
pub mod routes;

pub mod builder;
pub mod server;
pub mod state;
pub mod types;
mod utils;


pub use builder::{ServerBuilder, run_server};
pub use server::{HttpServer, build_cors};
pub use state::AppState;
