//! Plaintext method: stores values unencrypted (base64 only).

use tracing::trace;

use super::{Encryptor, KeyPaths};
use crate::error::Result;

/// Identity "encryption" that needs no keys.
pub struct Plaintext;

impl Encryptor for Plaintext {
    fn name(&self) -> &'static str {
        "plaintext"
    }

    fn encrypt(&self, plaintext: &[u8], _keys: &KeyPaths) -> Result<Vec<u8>> {
        trace!(len = plaintext.len(), "plaintext encrypt");
        Ok(plaintext.to_vec())
    }

    fn decrypt(&self, ciphertext: &[u8], _keys: &KeyPaths) -> Result<Vec<u8>> {
        trace!(len = ciphertext.len(), "plaintext decrypt");
        Ok(ciphertext.to_vec())
    }

    fn create_keys(&self, _keys: &KeyPaths) -> Result<()> {
        Ok(())
    }
}
