//! Key hashing utilities

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Length of an AES-256 key in bytes
pub const AUDIO_KEY_LEN: usize = 32;

/// Hash API key for in-memory comparison
pub fn hash_api_key(api_key: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hasher.finalize().into()
}

/// Short, non-reversible label for a key, safe to log
pub fn key_fingerprint(api_key: &str) -> String {
    hex::encode(&hash_api_key(api_key)[..4])
}

/// Fresh random key material from the thread RNG
pub fn generate_audio_key() -> [u8; AUDIO_KEY_LEN] {
    let mut key = [0u8; AUDIO_KEY_LEN];
    rand::thread_rng().fill_bytes(&mut key);
    key
}
