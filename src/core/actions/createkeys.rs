//! `--createkeys`: generate a keypair for the requested method.

use tracing::info;

use crate::core::dispatch::ActionHandler;
use crate::core::resolve::ResolvedConfiguration;
use crate::error::Result;

pub struct CreateKeys;

impl ActionHandler for CreateKeys {
    fn execute(&self, config: &ResolvedConfiguration<'_>) -> Result<String> {
        let encryptor = config.encryptor(&config.encrypt_method)?;
        encryptor.create_keys(&config.keys)?;

        info!(
            method = encryptor.name(),
            private = %config.keys.private_dir().display(),
            public = %config.keys.public_dir().display(),
            "keys created"
        );
        Ok("keys created OK".to_string())
    }
}
