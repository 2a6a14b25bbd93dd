//! eyaml - Encrypt and decrypt values inside configuration files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use eyaml::cli::output;
use eyaml::cli::{execute, Cli};
use eyaml::core::constants::BUILTIN_METHODS;
use eyaml::error::{CipherError, Error, ResolveError, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("EYAML_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("eyaml=debug")
        } else {
            EnvFilter::new("eyaml=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Resolve(ResolveError::MissingOperation) => Some("run: eyaml --help".to_string()),
            Error::Store(StoreError::NoPrivateKey(_) | StoreError::NoPublicKey(_)) => {
                Some("run: eyaml --createkeys".to_string())
            }
            Error::Cipher(CipherError::UnknownMethod(_)) => {
                Some(format!("available methods: {}", BUILTIN_METHODS.join(", ")))
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
