//! Provider error handling
//!
//! Single error type for every upstream service the gateway talks to.
//!
//! | Variant | Meaning |
//! |------|------|
//! | Authentication | Provider rejected our credential |
//! | ApiError | Non-2xx reply from the provider |
//! | Network | Connection or transport failure |
//! | Timeout | Stage exceeded its time budget |
//! | ResponseParsing | Reply did not have the expected shape |
//! | UnsupportedLanguage | Speech provider cannot voice the language |
//! | Configuration | Provider misconfigured at startup |

/// Unified provider error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("API error from {provider} (status {status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    ResponseParsing {
        provider: &'static str,
        message: String,
    },

    #[error("Language '{language}' is not supported by {provider}")]
    UnsupportedLanguage {
        provider: &'static str,
        language: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    pub fn response_parsing(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            provider,
            message: message.into(),
        }
    }

    pub fn unsupported_language(provider: &'static str, language: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            provider,
            language: language.into(),
        }
    }

    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Map a non-success HTTP status and body to an error
    pub fn from_status(provider: &'static str, status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::authentication(provider, "Provider rejected the credential"),
            _ => Self::api_error(provider, status, body.to_string()),
        }
    }

    /// Name of the provider that produced the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Authentication { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ResponseParsing { provider, .. }
            | Self::UnsupportedLanguage { provider, .. }
            | Self::Configuration { provider, .. } => provider,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
