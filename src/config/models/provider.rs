//! Provider configuration

use crate::core::providers::{GoogleTtsConfig, OpenAIConfig};
use serde::{Deserialize, Serialize};

/// Remote provider configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// OpenAI (transcription, enhancement, translation)
    #[serde(default)]
    pub openai: OpenAIConfig,
    /// Speech synthesis backend
    #[serde(default)]
    pub speech: SpeechConfig,
}

/// Which service voices translated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechBackend {
    #[default]
    GoogleTranslate,
    Openai,
}

/// Speech synthesis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default)]
    pub provider: SpeechBackend,
    #[serde(default)]
    pub google: GoogleTtsConfig,
}

impl ProvidersConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.openai.validate()?;
        if !self.openai.has_api_key() {
            return Err(
                "OpenAI API key is required (providers.openai.api_key or OPENAI_API_KEY)"
                    .to_string(),
            );
        }

        if self.speech.provider == SpeechBackend::GoogleTranslate {
            self.speech.google.validate()?;
        }
        Ok(())
    }
}
