//! Encryption methods.
//!
//! Every method named in an `ENC[method,payload]` tag is backed by an
//! [`Encryptor`] registered in the [`Registry`]. Encryptors work on raw
//! bytes; the tag module owns the base64 payload encoding.
//!
//! ## Methods
//!
//! - **age**: Default. x25519 public-key encryption with key files on disk.
//! - **plaintext**: No encryption. Useful for fixtures and for testing
//!   configuration pipelines without keys.
//!
//! ## Adding a New Method
//!
//! 1. Implement the `Encryptor` trait in a new file
//! 2. Register it in `Registry::builtin`

use std::path::{Path, PathBuf};

use crate::core::constants::DEFAULT_KEY_DIR;
use crate::error::Result;

mod age;
mod plaintext;
mod registry;

pub use age::Age;
pub use plaintext::Plaintext;
pub use registry::Registry;

/// Directories holding the key material encryptors read and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPaths {
    pub private_key_dir: PathBuf,
    pub public_key_dir: PathBuf,
}

impl KeyPaths {
    pub fn new(private_key_dir: impl Into<PathBuf>, public_key_dir: impl Into<PathBuf>) -> Self {
        Self {
            private_key_dir: private_key_dir.into(),
            public_key_dir: public_key_dir.into(),
        }
    }

    /// Directory containing private keys.
    pub fn private_dir(&self) -> &Path {
        &self.private_key_dir
    }

    /// Directory containing public keys.
    pub fn public_dir(&self) -> &Path {
        &self.public_key_dir
    }
}

impl Default for KeyPaths {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_DIR, DEFAULT_KEY_DIR)
    }
}

/// An encryption method.
///
/// Implementations hold no per-invocation state; key material is located
/// through the [`KeyPaths`] passed to each call.
pub trait Encryptor: Send + Sync {
    /// Method name as written in tags.
    fn name(&self) -> &'static str;

    /// Encrypt plaintext bytes.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails, or `StoreError` if the
    /// public key cannot be loaded.
    fn encrypt(&self, plaintext: &[u8], keys: &KeyPaths) -> Result<Vec<u8>>;

    /// Decrypt ciphertext bytes.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if decryption fails, or `StoreError` if the
    /// private key cannot be loaded.
    fn decrypt(&self, ciphertext: &[u8], keys: &KeyPaths) -> Result<Vec<u8>>;

    /// Create a new keypair in the key directories.
    fn create_keys(&self, keys: &KeyPaths) -> Result<()>;
}
