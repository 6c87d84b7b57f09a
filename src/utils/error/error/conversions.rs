//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::providers::ProviderError;

// Provider failures stay wrapped so the HTTP layer can treat them uniformly as 500s
impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        GatewayError::Provider(err)
    }
}

impl From<aes_gcm::Error> for GatewayError {
    fn from(_: aes_gcm::Error) -> Self {
        // aead errors are opaque on purpose; nothing useful to carry over
        GatewayError::Crypto("AEAD operation failed".to_string())
    }
}

impl From<base64::DecodeError> for GatewayError {
    fn from(err: base64::DecodeError) -> Self {
        GatewayError::Crypto(format!("Malformed ciphertext encoding: {}", err))
    }
}
