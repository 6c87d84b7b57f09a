//! Authentication configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authentication configuration
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Accepted `X-API-Key` values
    #[serde(default)]
    pub api_keys: Vec<String>,
}

impl AuthConfig {
    /// Replace the allow-list from a comma-separated list
    pub fn set_keys_from_list(&mut self, list: &str) {
        self.api_keys = list
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .collect();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_keys.iter().all(|key| key.trim().is_empty()) {
            return Err(
                "At least one API key must be configured (auth.api_keys or GATEWAY_API_KEYS)"
                    .to_string(),
            );
        }
        Ok(())
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_keys", &format!("[{} redacted]", self.api_keys.len()))
            .finish()
    }
}
