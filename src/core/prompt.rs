//! Secret input for the `--password` source.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Password;
use tracing::debug;

use crate::error::Result;

/// Source of a secret typed by the operator.
pub trait SecretPrompt {
    /// Read one secret value.
    fn read_secret(&self) -> Result<String>;
}

/// Hidden terminal prompt, or one line of stdin when input is piped.
pub struct TerminalPrompt;

impl SecretPrompt for TerminalPrompt {
    fn read_secret(&self) -> Result<String> {
        if !io::stdin().is_terminal() {
            debug!("reading secret from stdin");
            let mut input = String::new();
            io::stdin().lock().read_line(&mut input)?;
            return Ok(input.trim_end_matches(['\r', '\n']).to_string());
        }

        let value = Password::new()
            .with_prompt("Enter password")
            .interact()?;
        Ok(value)
    }
}
