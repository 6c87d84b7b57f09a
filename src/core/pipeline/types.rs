//! Pipeline request and result types

use crate::storage::AudioArtifact;
use serde::{Deserialize, Serialize};

/// Text to translate and voice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// Result of the translate pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    pub translated_text: String,
    pub audio: AudioArtifact,
}
