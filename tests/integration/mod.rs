//! Integration tests for medtalk-gateway
//!
//! Requests go through the real actix application, middleware and provider
//! clients; only the upstream HTTP services are doubles.

pub mod auth_tests;
pub mod config_tests;
pub mod error_handling_tests;
pub mod timeout_tests;
pub mod translate_tests;
