//! Age encryption method.
//!
//! Encrypts with x25519 keys stored as text files in the key directories:
//! `public_key.age` (`age1...`) and `private_key.age` (`AGE-SECRET-KEY-...`).
//! Ciphertext is the binary age format; the tag payload base64-encodes it.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use ::age::x25519;
use tracing::{debug, trace, warn};

use super::{Encryptor, KeyPaths};
use crate::error::{CipherError, Result, StoreError};

/// Private key file name inside the private key directory.
pub const PRIVATE_KEY_FILE: &str = "private_key.age";

/// Public key file name inside the public key directory.
pub const PUBLIC_KEY_FILE: &str = "public_key.age";

/// Age-based encryption method using x25519 keys
pub struct Age;

impl Age {
    fn load_recipient(keys: &KeyPaths) -> Result<x25519::Recipient> {
        let path = keys.public_dir().join(PUBLIC_KEY_FILE);
        debug!(path = %path.display(), "loading public key");

        if !path.exists() {
            return Err(StoreError::NoPublicKey(path.display().to_string()).into());
        }
        let contents = fs::read_to_string(&path).map_err(StoreError::ReadFailed)?;
        contents
            .trim()
            .parse::<x25519::Recipient>()
            .map_err(|e: &str| CipherError::InvalidKey(format!("{}: {}", path.display(), e)).into())
    }

    fn load_identity(keys: &KeyPaths) -> Result<x25519::Identity> {
        let path = keys.private_dir().join(PRIVATE_KEY_FILE);
        debug!(path = %path.display(), "loading private key");

        if !path.exists() {
            return Err(StoreError::NoPrivateKey(path.display().to_string()).into());
        }

        #[cfg(unix)]
        warn_insecure_permissions(&path);

        let contents = fs::read_to_string(&path).map_err(StoreError::ReadFailed)?;
        contents
            .trim()
            .parse::<x25519::Identity>()
            .map_err(|e: &str| CipherError::InvalidKey(format!("{}: {}", path.display(), e)).into())
    }
}

impl Encryptor for Age {
    fn name(&self) -> &'static str {
        "age"
    }

    fn encrypt(&self, plaintext: &[u8], keys: &KeyPaths) -> Result<Vec<u8>> {
        let recipient = Self::load_recipient(keys)?;
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let encryptor =
            age::Encryptor::with_recipients(std::iter::once(&recipient as &dyn age::Recipient))
                .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        let mut encrypted = Vec::new();
        let mut writer = encryptor
            .wrap_output(&mut encrypted)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
        writer.write_all(plaintext)?;
        writer
            .finish()
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        trace!(ciphertext_len = encrypted.len(), "encrypted");
        Ok(encrypted)
    }

    fn decrypt(&self, ciphertext: &[u8], keys: &KeyPaths) -> Result<Vec<u8>> {
        let identity = Self::load_identity(keys)?;
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let decryptor = age::Decryptor::new(ciphertext)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        let mut decrypted = Vec::new();
        let mut reader = decryptor
            .decrypt(std::iter::once(&identity as &dyn age::Identity))
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;
        reader
            .read_to_end(&mut decrypted)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        trace!(plaintext_len = decrypted.len(), "decrypted");
        Ok(decrypted)
    }

    fn create_keys(&self, keys: &KeyPaths) -> Result<()> {
        let private_path = keys.private_dir().join(PRIVATE_KEY_FILE);
        let public_path = keys.public_dir().join(PUBLIC_KEY_FILE);

        for path in [&private_path, &public_path] {
            if path.exists() {
                return Err(StoreError::KeyExists(path.display().to_string()).into());
            }
        }

        debug!(
            private = %private_path.display(),
            public = %public_path.display(),
            "generating age keypair"
        );

        let identity = x25519::Identity::generate();

        fs::create_dir_all(keys.private_dir()).map_err(StoreError::WriteFailed)?;
        fs::create_dir_all(keys.public_dir()).map_err(StoreError::WriteFailed)?;

        // Write identity using Display trait (outputs AGE-SECRET-KEY-...)
        use age::secrecy::ExposeSecret;
        let secret_str = identity.to_string();
        fs::write(&private_path, format!("{}\n", secret_str.expose_secret()))
            .map_err(StoreError::WriteFailed)?;
        fs::write(&public_path, format!("{}\n", identity.to_public()))
            .map_err(StoreError::WriteFailed)?;

        // Restrict permissions on key files (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&private_path, fs::Permissions::from_mode(0o600))
                .map_err(StoreError::WriteFailed)?;
            fs::set_permissions(&public_path, fs::Permissions::from_mode(0o644))
                .map_err(StoreError::WriteFailed)?;
        }

        debug!("age keypair saved");
        Ok(())
    }
}

#[cfg(unix)]
fn warn_insecure_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let Ok(metadata) = fs::metadata(path) else {
        return;
    };
    let mode = metadata.permissions().mode() & 0o777;
    if mode & 0o077 != 0 {
        warn!(
            path = %path.display(),
            mode = %format!("{:o}", mode),
            "insecure key file permissions"
        );
    }
}
