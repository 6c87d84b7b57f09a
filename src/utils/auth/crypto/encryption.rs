//! Audio encryption with AES-256-GCM
//!
//! Output format: `base64(nonce || ciphertext || tag)`
//! - nonce: 12 bytes (randomly generated)
//! - ciphertext: same length as the plaintext
//! - tag: 16 bytes (authentication tag)

use crate::utils::error::{GatewayError, Result};
use aes_gcm::{
    Aes256Gcm, Key, Nonce,
    aead::{Aead, KeyInit},
};
use base64::{Engine as _, engine::general_purpose};
use rand::RngCore;
use std::fmt;
use std::path::Path;
use tracing::debug;

use super::keys::{AUDIO_KEY_LEN, generate_audio_key};

/// AES-256-GCM nonce size (96 bits / 12 bytes as recommended by NIST)
const AES_GCM_NONCE_SIZE: usize = 12;

/// AES-GCM authentication tag size
const AES_GCM_TAG_SIZE: usize = 16;

/// Symmetric cipher for generated audio.
///
/// Holds one key for the life of the process. The key is never written
/// anywhere, so artifacts encrypted by a previous process cannot be opened.
#[derive(Clone)]
pub struct AudioCipher {
    cipher: Aes256Gcm,
}

impl AudioCipher {
    /// Cipher with a freshly generated random key
    pub fn generate() -> Self {
        let key = generate_audio_key();
        Self::from_key_bytes(&key)
    }

    /// Cipher from an exact 256-bit key
    pub fn from_key_bytes(key: &[u8; AUDIO_KEY_LEN]) -> Self {
        let cipher_key = Key::<Aes256Gcm>::from_slice(key);
        Self {
            cipher: Aes256Gcm::new(cipher_key),
        }
    }

    /// Encrypt `plaintext`, returning the base64 artifact bytes
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut nonce_bytes = [0u8; AES_GCM_NONCE_SIZE];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self.cipher.encrypt(nonce, plaintext)?;

        let mut output = Vec::with_capacity(AES_GCM_NONCE_SIZE + ciphertext.len());
        output.extend_from_slice(&nonce_bytes);
        output.extend_from_slice(&ciphertext);

        Ok(general_purpose::STANDARD.encode(&output).into_bytes())
    }

    /// Decrypt an artifact produced by [`AudioCipher::encrypt`].
    ///
    /// Fails if the data was tampered with or was sealed under another key.
    pub fn decrypt(&self, artifact: &[u8]) -> Result<Vec<u8>> {
        let encoded = artifact.trim_ascii();
        let encrypted_bytes = general_purpose::STANDARD.decode(encoded)?;

        if encrypted_bytes.len() < AES_GCM_NONCE_SIZE + AES_GCM_TAG_SIZE {
            return Err(GatewayError::crypto(
                "Encrypted data too short - possible corruption or tampering",
            ));
        }

        let (nonce, ciphertext) = encrypted_bytes.split_at(AES_GCM_NONCE_SIZE);
        let plaintext = self.cipher.decrypt(Nonce::from_slice(nonce), ciphertext)?;
        Ok(plaintext)
    }

    /// Replace the file's content with its ciphertext.
    ///
    /// The ciphertext goes to a sibling file first and is renamed over the
    /// original, so a failure never leaves a half-written artifact.
    pub async fn encrypt_in_place(&self, path: &Path) -> Result<()> {
        let plaintext = tokio::fs::read(path).await?;
        let sealed = self.encrypt(&plaintext)?;

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".sealing");
        let tmp_path = std::path::PathBuf::from(tmp_name);

        if let Err(e) = tokio::fs::write(&tmp_path, &sealed).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }
        if let Err(e) = tokio::fs::rename(&tmp_path, path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        debug!(bytes = plaintext.len(), "Encrypted audio artifact in place");
        Ok(())
    }
}

impl fmt::Debug for AudioCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioCipher")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
