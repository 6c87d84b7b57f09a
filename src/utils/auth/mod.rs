//! Security utilities
//!
//! Cryptographic helpers shared by the gateway.

pub mod crypto;

pub use crypto::{AudioCipher, hash_api_key, key_fingerprint};
