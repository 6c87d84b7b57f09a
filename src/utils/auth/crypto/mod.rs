//! Cryptographic utilities for the Gateway
//!
//! Authenticated encryption of generated audio using AES-256-GCM, and hashing
//! of API keys.

pub mod encryption;
pub mod keys;


pub use encryption::AudioCipher;
pub use keys::{hash_api_key, key_fingerprint};
