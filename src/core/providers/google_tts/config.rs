//! Google Translate speech configuration

use serde::{Deserialize, Serialize};

/// Google Translate text-to-speech configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTtsConfig {
    /// Base URL of the translate host
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum characters per `translate_tts` request
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,

    /// Request the slower speaking rate
    #[serde(default)]
    pub slow: bool,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for GoogleTtsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_chunk_chars: default_max_chunk_chars(),
            slow: false,
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl GoogleTtsConfig {
    pub fn validate(&self) -> Result<(), String> {
        url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid Google TTS base URL '{}': {}", self.base_url, e))?;

        // The endpoint rejects anything much above 200 characters
        if self.max_chunk_chars == 0 || self.max_chunk_chars > 200 {
            return Err("max_chunk_chars must be between 1 and 200".to_string());
        }

        if self.connect_timeout == 0 {
            return Err("connect_timeout must be greater than 0".to_string());
        }

        Ok(())
    }

    pub fn endpoint(&self) -> String {
        format!("{}/translate_tts", self.base_url.trim_end_matches('/'))
    }
}

fn default_base_url() -> String {
    "https://translate.google.com".to_string()
}

fn default_max_chunk_chars() -> usize {
    100
}

fn default_connect_timeout() -> u64 {
    10
}
