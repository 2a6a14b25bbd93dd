//! `--decrypt`: replace tags with their plaintext.
//!
//! Eyaml files decrypt to editable `DEC::method[plaintext]!` markers so the
//! result can be encrypted again; other sources decrypt to the bare value.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::dispatch::ActionHandler;
use crate::core::marker;
use crate::core::resolve::{ResolvedConfiguration, Source};
use crate::core::tag::{self, Tag};
use crate::error::{CipherError, Result};

pub struct Decrypt;

impl ActionHandler for Decrypt {
    fn execute(&self, config: &ResolvedConfiguration<'_>) -> Result<String> {
        match config.source {
            Source::EyamlFile(_) => decrypt_to_markers(config, config.input()),
            _ => tag::replace(config.input(), |t| Ok(decrypt_tag(config, t)?.to_string())),
        }
    }
}

/// Replace each tag in `text` with an editable marker.
pub(crate) fn decrypt_to_markers(config: &ResolvedConfiguration<'_>, text: &str) -> Result<String> {
    tag::replace(text, |t| {
        let plaintext = decrypt_tag(config, t)?;
        Ok(marker::render(t.method_or_default(), &plaintext))
    })
}

fn decrypt_tag(config: &ResolvedConfiguration<'_>, t: &Tag<'_>) -> Result<Zeroizing<String>> {
    let method = t.method_or_default();
    let decrypted = config
        .encryptor(method)?
        .decrypt(&t.ciphertext()?, &config.keys)?;
    debug!(method, len = decrypted.len(), "decrypted tag");

    String::from_utf8(decrypted)
        .map(Zeroizing::new)
        .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)).into())
}
