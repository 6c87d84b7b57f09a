//! Core traits module
//!
//! Contains the abstract interfaces the pipeline stages call through

pub mod provider;

pub use provider::*;
