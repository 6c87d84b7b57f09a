//! API key gate
//!
//! Set-membership check of the caller's `X-API-Key` against the configured
//! allow-list. Keys are held only as SHA-256 digests.

use crate::utils::auth::crypto::{hash_api_key, key_fingerprint};
use crate::utils::error::{GatewayError, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Header carrying the caller's key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Allow-list of accepted API keys
#[derive(Debug, Clone)]
pub struct ApiKeyGate {
    digests: Arc<HashSet<[u8; 32]>>,
}

impl ApiKeyGate {
    /// Build the gate. Blank entries are ignored; an empty list is rejected.
    pub fn new<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let digests: HashSet<[u8; 32]> = keys
            .into_iter()
            .map(|key| key.as_ref().trim().to_string())
            .filter(|key| !key.is_empty())
            .map(|key| hash_api_key(&key))
            .collect();

        if digests.is_empty() {
            return Err(GatewayError::config("API key allow-list is empty"));
        }

        Ok(Self {
            digests: Arc::new(digests),
        })
    }

    /// Return the key unchanged if it is allowed, otherwise `Forbidden`
    pub fn verify<'a>(&self, key: Option<&'a str>) -> Result<&'a str> {
        let Some(key) = key else {
            warn!("Rejected request without API key");
            return Err(GatewayError::forbidden("Missing API key"));
        };

        if self.digests.contains(&hash_api_key(key)) {
            debug!(key_id = %key_fingerprint(key), "API key accepted");
            Ok(key)
        } else {
            warn!(key_id = %key_fingerprint(key), "Rejected request with unknown API key");
            Err(GatewayError::forbidden("Invalid API key"))
        }
    }

    /// Number of distinct keys in the allow-list
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }
}
