//! Encryption method registry.
//!
//! Maps method names to encryptors. Built once at startup and only read
//! afterwards; callers hold it by reference.

use std::collections::BTreeMap;

use tracing::debug;

use super::{Age, Encryptor, Plaintext};
use crate::core::constants::DEFAULT_METHOD;
use crate::error::{CipherError, Result};

/// Name → encryptor table.
pub struct Registry {
    encryptors: BTreeMap<&'static str, Box<dyn Encryptor>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            encryptors: BTreeMap::new(),
        }
    }

    /// Registry holding every built-in method, as listed in
    /// [`BUILTIN_METHODS`](crate::core::constants::BUILTIN_METHODS).
    pub fn builtin() -> Self {
        Self::new().with(Age).with(Plaintext)
    }

    /// Register an encryptor under its own name, replacing any previous one.
    pub fn with(mut self, encryptor: impl Encryptor + 'static) -> Self {
        self.encryptors.insert(encryptor.name(), Box::new(encryptor));
        self
    }

    /// Method used when none is named.
    pub fn default_method(&self) -> &'static str {
        DEFAULT_METHOD
    }

    /// Look up the encryptor registered for `method`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::UnknownMethod` if nothing is registered under
    /// that name.
    pub fn resolve(&self, method: &str) -> Result<&dyn Encryptor> {
        debug!(method, "resolving encryption method");
        self.encryptors
            .get(method)
            .map(|e| e.as_ref())
            .ok_or_else(|| CipherError::UnknownMethod(method.to_string()).into())
    }

    /// Registered method names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.encryptors.keys().copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
