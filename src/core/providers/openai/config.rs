//! OpenAI Provider Configuration

use serde::{Deserialize, Serialize};

/// Environment variables checked for the OpenAI credential, in priority order
pub const API_KEY_ENV_VARS: &[&str] = &["OPENAI_API_KEY", "REACT_APP_Open_AI_key"];

/// OpenAI provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    /// API key; usually supplied through the environment rather than the file
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Organization ID (optional)
    #[serde(default)]
    pub organization: Option<String>,

    /// Speech-to-text model
    #[serde(default = "default_transcription_model")]
    pub transcription_model: String,

    /// Chat model used for enhancement and translation
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Text-to-speech model, used when OpenAI is the speech backend
    #[serde(default = "default_speech_model")]
    pub speech_model: String,

    /// Text-to-speech voice
    #[serde(default = "default_voice")]
    pub voice: String,

    /// TCP connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            organization: None,
            transcription_model: default_transcription_model(),
            chat_model: default_chat_model(),
            speech_model: default_speech_model(),
            voice: default_voice(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl std::fmt::Debug for OpenAIConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("organization", &self.organization)
            .field("transcription_model", &self.transcription_model)
            .field("chat_model", &self.chat_model)
            .field("speech_model", &self.speech_model)
            .field("voice", &self.voice)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl OpenAIConfig {
    /// Apply overrides from process environment variables
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Apply overrides using an arbitrary variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
        {
            self.api_key = Some(api_key.trim().to_string());
        }

        if let Some(base_url) = lookup("OPENAI_API_BASE") {
            self.api_base = base_url;
        }

        if let Some(org) = lookup("OPENAI_ORG_ID") {
            self.organization = Some(org);
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        url::Url::parse(&self.api_base)
            .map_err(|e| format!("Invalid OpenAI api_base '{}': {}", self.api_base, e))?;

        if self.connect_timeout == 0 {
            return Err("OpenAI connect_timeout cannot be 0".to_string());
        }

        for (field, value) in [
            ("transcription_model", &self.transcription_model),
            ("chat_model", &self.chat_model),
            ("speech_model", &self.speech_model),
            ("voice", &self.voice),
        ] {
            if value.trim().is_empty() {
                return Err(format!("OpenAI {} cannot be empty", field));
            }
        }

        if let Some(ref org) = self.organization {
            if org.is_empty() {
                return Err("Organization ID cannot be empty".to_string());
            }
        }

        Ok(())
    }

    /// Whether a credential has been configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// API base without a trailing slash
    pub fn get_api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_transcription_model() -> String {
    "whisper-1".to_string()
}

fn default_chat_model() -> String {
    "gpt-4".to_string()
}

fn default_speech_model() -> String {
    "tts-1".to_string()
}

fn default_voice() -> String {
    "alloy".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}
