//! Response bodies of the HTTP API

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// `GET /health` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: Cow<'static, str>,
}

/// `POST /speech-to-text/` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechToTextResponse {
    pub success: bool,
    pub transcription: String,
}

/// `POST /translate/` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub translated_text: String,
    /// Gated retrieval URL of the sealed audio, never a filesystem path
    pub audio_path: String,
    pub audio_id: String,
}
