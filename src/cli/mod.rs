//! Command-line interface.

pub mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::core::cipher::{KeyPaths, Registry};
use crate::core::config::Settings;
use crate::core::dispatch::Dispatcher;
use crate::core::format::OutputFormat;
use crate::core::prompt::TerminalPrompt;
use crate::core::resolve::{self, Directives};
use crate::error::Result;

/// eyaml - encrypt and decrypt values inside configuration files.
#[derive(Parser, Debug, Default)]
#[command(
    name = "eyaml",
    about = "Encrypt and decrypt values inside configuration files",
    version,
    after_help = "Exactly one action and, except for --createkeys, exactly one source.\n\n\
                  Examples:\n  \
                  eyaml --createkeys\n  \
                  eyaml --encrypt --string 'hunter2'\n  \
                  eyaml --decrypt --eyaml secrets.yaml\n  \
                  eyaml --edit secrets.yaml"
)]
pub struct Cli {
    /// Create public and private keys for the encryption method
    #[arg(short, long, help_heading = "Actions")]
    pub createkeys: bool,

    /// Decrypt something
    #[arg(short, long, help_heading = "Actions")]
    pub decrypt: bool,

    /// Encrypt something
    #[arg(short, long, help_heading = "Actions")]
    pub encrypt: bool,

    /// Decrypt, edit in $EDITOR, and re-encrypt an eyaml file
    #[arg(long, value_name = "PATH", help_heading = "Actions")]
    pub edit: Option<PathBuf>,

    /// Source input is an eyaml file
    #[arg(long, value_name = "PATH", help_heading = "Sources")]
    pub eyaml: Option<PathBuf>,

    /// Source input is a password entered on the terminal
    #[arg(short, long, help_heading = "Sources")]
    pub password: bool,

    /// Source input is a string provided as an argument
    #[arg(
        short,
        long,
        value_name = "VALUE",
        allow_hyphen_values = true,
        help_heading = "Sources"
    )]
    pub string: Option<String>,

    /// Source input is a file
    #[arg(short, long, value_name = "PATH", help_heading = "Sources")]
    pub file: Option<PathBuf>,

    /// Directory containing private keys [default: ./keys]
    #[arg(long, value_name = "PATH", env = "EYAML_PRIVATE_KEY_DIR")]
    pub private_key_dir: Option<PathBuf>,

    /// Directory containing public keys [default: ./keys]
    #[arg(long, value_name = "PATH", env = "EYAML_PUBLIC_KEY_DIR")]
    pub public_key_dir: Option<PathBuf>,

    /// Encryption method (only if encrypting a password, string or regular file) [default: age]
    #[arg(long, value_name = "METHOD", env = "EYAML_ENCRYPT_METHOD")]
    pub encrypt_method: Option<String>,

    /// Output format of the final result [default: examples]
    #[arg(short, long, value_enum, env = "EYAML_OUTPUT")]
    pub output: Option<OutputFormat>,

    /// Settings file [default: ./.eyaml.toml, then ~/.eyaml/config.toml]
    #[arg(long, value_name = "PATH", env = "EYAML_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Convert flags into resolver directives, filling auxiliary values
    /// from the settings file where no flag was given.
    pub fn into_directives(self, settings: &Settings) -> Directives {
        Directives {
            keys: KeyPaths::new(
                settings.private_key_dir(self.private_key_dir.clone()),
                settings.public_key_dir(self.public_key_dir.clone()),
            ),
            encrypt_method: settings.encrypt_method(self.encrypt_method.clone()),
            output: settings.output(self.output),
            ..self.operation()
        }
    }

    /// Action and source flags only, with default auxiliary values.
    ///
    /// Enough to validate the request without reading any settings.
    pub fn operation(&self) -> Directives {
        Directives {
            createkeys: self.createkeys,
            decrypt: self.decrypt,
            encrypt: self.encrypt,
            edit: self.edit.clone(),
            eyaml: self.eyaml.clone(),
            password: self.password,
            string: self.string.clone(),
            file: self.file.clone(),
            ..Default::default()
        }
    }
}

/// Resolve the command line, run the requested action and print its result.
pub fn execute(cli: Cli) -> Result<()> {
    // Contradictory flags are reported before any settings file is touched.
    let (action, source) = resolve::select(&cli.operation())?;
    debug!(%action, source = source.name(), "flags valid");

    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");

    let directives = cli.into_directives(&settings);
    let registry = Registry::builtin();
    let config = resolve::resolve(directives, &registry, &TerminalPrompt)?;
    debug!(?config, "resolved");

    let result = Dispatcher::builtin().dispatch(&config)?;
    if !result.is_empty() {
        println!("{}", result);
    }
    Ok(())
}
