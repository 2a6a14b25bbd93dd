//! eyaml - Encrypt individual values inside configuration files.
//!
//! Values are stored inline as `ENC[method,payload]` tags, so the rest of a
//! YAML (or any text) file stays readable and diffable.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line flags and terminal output
//! └── core/             # Core library components
//!     ├── tag           # ENC[...] scanner
//!     ├── marker        # DEC::method[...]! editable markers
//!     ├── cipher/       # Encryptor trait, registry, age + plaintext
//!     ├── resolve       # Directives → one action, one source
//!     ├── dispatch      # Action → handler table
//!     ├── actions/      # createkeys, encrypt, decrypt, edit
//!     ├── format        # examples / block / string output
//!     ├── prompt        # Hidden password input
//!     └── config        # Optional settings file
//! ```
//!
//! # Flow
//!
//! Raw directives go through [`core::resolve::resolve`], which picks the
//! action and source, loads the input, and resolves the encryptor for every
//! method the input uses. The result goes to
//! [`core::dispatch::Dispatcher::dispatch`], which runs the action's handler
//! and returns the text to print.

pub mod cli;
pub mod core;
pub mod error;
