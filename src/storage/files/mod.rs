//! File storage
//!
//! Per-request staging of audio and the encrypted artifact store.

mod artifacts;
mod staging;

pub use artifacts::{AudioArtifact, AudioArtifactStore};
pub use staging::{StagedFile, StagingArea};
