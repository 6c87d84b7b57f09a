//! Storage layer for the Gateway
//!
//! Local filesystem only: staged request audio and encrypted output audio.

/// File storage module
pub mod files;

pub use files::{AudioArtifact, AudioArtifactStore, StagedFile, StagingArea};
