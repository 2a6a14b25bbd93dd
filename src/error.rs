//! Error types.
//!
//! One enum per concern, wrapped by the top-level [`Error`].

use thiserror::Error;

/// Top-level error returned by every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No handler registered for the resolved action.
    #[error("no handler registered for action: {0}")]
    UnknownAction(String),

    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("editor failed: {0}")]
    Editor(String),

    #[error("failed to read secret: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while turning raw directives into one operation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("you can only specify one of ({})", .0.join(", "))]
    AmbiguousAction(Vec<&'static str>),

    #[error("you can only specify one of ({})", .0.join(", "))]
    AmbiguousSource(Vec<&'static str>),

    #[error("creating keys does not require a source to encrypt/decrypt")]
    InvalidCombination,

    #[error("nothing to do")]
    MissingOperation,
}

/// Encryption method and payload failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("unknown encryption method: {0}")]
    UnknownMethod(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("invalid payload for method {method}: {reason}")]
    InvalidPayload { method: String, reason: String },

    #[error("invalid key: {0}")]
    InvalidKey(String),
}

/// Key file storage failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no private key found at {0}")]
    NoPrivateKey(String),

    #[error("no public key found at {0}")]
    NoPublicKey(String),

    #[error("key already exists: {0}")]
    KeyExists(String),

    #[error("failed to read key: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("failed to write key: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Settings file failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("settings file not found: {0}")]
    NotFound(String),

    #[error("failed to read settings {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
