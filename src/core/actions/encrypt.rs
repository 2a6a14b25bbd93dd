//! `--encrypt`: encrypt a raw value, or every marker in an eyaml file.

use tracing::debug;

use crate::core::dispatch::ActionHandler;
use crate::core::resolve::{ResolvedConfiguration, Source};
use crate::core::{marker, tag};
use crate::error::Result;

pub struct Encrypt;

impl ActionHandler for Encrypt {
    fn execute(&self, config: &ResolvedConfiguration<'_>) -> Result<String> {
        match config.source {
            Source::EyamlFile(_) => encrypt_markers(config, config.input()),
            _ => {
                let method = config.encrypt_method.as_str();
                let ciphertext = config
                    .encryptor(method)?
                    .encrypt(config.input().as_bytes(), &config.keys)?;
                Ok(config.output.render(&tag::render(method, &ciphertext)))
            }
        }
    }
}

/// Replace each `DEC::method[plaintext]!` marker in `text` with a tag.
///
/// Markers without a method use the requested encryption method. Existing
/// `ENC[...]` tags are left as they are.
pub(crate) fn encrypt_markers(config: &ResolvedConfiguration<'_>, text: &str) -> Result<String> {
    let mut count = 0usize;
    let out = marker::replace(text, |m| {
        let method = m.method.unwrap_or(&config.encrypt_method);
        let ciphertext = config
            .encryptor(method)?
            .encrypt(m.plaintext.as_bytes(), &config.keys)?;
        count += 1;
        Ok(tag::render(method, &ciphertext))
    })?;
    debug!(count, "encrypted markers");
    Ok(out)
}
