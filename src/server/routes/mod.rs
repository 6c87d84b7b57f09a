//! HTTP route modules
//!
//! - **health**: unauthenticated liveness probe
//! - **clinical**: speech-to-text, translation and audio retrieval, all
//!   behind the API key gate

pub mod clinical;
pub mod health;

use actix_web::web;

/// Register every route of the gateway
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(clinical::configure_routes);
}
