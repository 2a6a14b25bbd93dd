//! Settings file.
//!
//! Optional TOML file supplying defaults for the auxiliary flags:
//!
//! ```toml
//! private_key_dir = "/etc/eyaml/keys"
//! public_key_dir = "./keys"
//! encrypt_method = "age"
//! output = "string"
//! ```
//!
//! Lookup order: `--config`, `$EYAML_CONFIG`, `./.eyaml.toml`,
//! `~/.eyaml/config.toml`. Command-line flags and `EYAML_*` environment
//! variables take precedence over anything read here.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::core::format::OutputFormat;
use crate::error::{ConfigError, Result};

/// Defaults read from a settings file. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub private_key_dir: Option<PathBuf>,
    pub public_key_dir: Option<PathBuf>,
    pub encrypt_method: Option<String>,
    pub output: Option<OutputFormat>,
}

impl Settings {
    /// Load settings.
    ///
    /// An explicitly named file must exist. When none is named, the
    /// implicit locations are tried and a missing file yields empty
    /// settings.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.display().to_string()).into());
            }
            return Self::from_file(path);
        }

        for path in Self::implicit_paths() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        debug!("no settings file found");
        Ok(Self::default())
    }

    /// Parse settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| {
            ConfigError::Parse {
                path: path.display().to_string(),
                source,
            }
            .into()
        })
    }

    fn implicit_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(constants::CONFIG_FILE)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(constants::GLOBAL_CONFIG_FILE));
        }
        paths
    }

    /// Private key directory, falling back to `./keys`.
    pub fn private_key_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.private_key_dir.clone())
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_KEY_DIR))
    }

    /// Public key directory, falling back to `./keys`.
    pub fn public_key_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.public_key_dir.clone())
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_KEY_DIR))
    }

    /// Encryption method; `None` leaves the choice to the registry default.
    pub fn encrypt_method(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.encrypt_method.clone())
    }

    /// Output format, falling back to `examples`.
    pub fn output(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.output).unwrap_or_default()
    }
}
