//! Constants used throughout eyaml.
//!
//! Centralizes magic strings and configuration values.

/// Encryption method used when a tag or `--encrypt-method` names none.
pub const DEFAULT_METHOD: &str = "age";

/// Methods every build registers.
pub const BUILTIN_METHODS: &[&str] = &["age", "plaintext"];

/// Default directory for both private and public keys.
pub const DEFAULT_KEY_DIR: &str = "./keys";

/// Opening of an inline encrypted value (`ENC[method,payload]`).
pub const TAG_OPEN: &str = "ENC[";

/// Closing of an inline encrypted value.
pub const TAG_CLOSE: char = ']';

/// Separator between method name and payload inside a tag.
pub const TAG_METHOD_SEPARATOR: char = ',';

/// Opening of an editable decrypted value (`DEC::method[plaintext]!`).
pub const MARKER_OPEN: &str = "DEC::";

/// Closing of an editable decrypted value.
pub const MARKER_CLOSE: &str = "]!";

/// Escapes `]` and itself inside a marker body.
pub const MARKER_ESCAPE: char = '\\';

/// Width of each line in block output.
pub const BLOCK_WIDTH: usize = 60;

/// Indentation of block output lines.
pub const BLOCK_INDENT: &str = "    ";

/// Settings file looked up in the working directory.
pub const CONFIG_FILE: &str = ".eyaml.toml";

/// Settings file relative to HOME (`~/.eyaml/config.toml`).
pub const GLOBAL_CONFIG_FILE: &str = ".eyaml/config.toml";

/// Editor used by `--edit` when `$EDITOR` is unset.
pub const DEFAULT_EDITOR: &str = "vi";
