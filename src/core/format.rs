//! Rendering of freshly encrypted values.

use std::fmt;

use serde::Deserialize;

use crate::core::constants::{BLOCK_INDENT, BLOCK_WIDTH};

/// How `--encrypt` prints a new tag.
#[derive(clap::ValueEnum, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Both the string and the block form, ready to paste.
    #[default]
    Examples,
    /// Folded YAML block, wrapped at 60 columns.
    Block,
    /// The bare `ENC[...]` tag on one line.
    String,
}

impl OutputFormat {
    /// Render a tag in this format.
    pub fn render(self, tag: &str) -> String {
        match self {
            Self::String => tag.to_string(),
            Self::Block => block(tag),
            Self::Examples => format!("string: {}\n\nOR\n\nblock: {}", tag, block(tag)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Examples => "examples",
            Self::Block => "block",
            Self::String => "string",
        };
        f.write_str(name)
    }
}

fn block(tag: &str) -> String {
    let mut out = String::from(">");
    let chars: Vec<char> = tag.chars().collect();
    for line in chars.chunks(BLOCK_WIDTH) {
        out.push('\n');
        out.push_str(BLOCK_INDENT);
        out.extend(line);
    }
    out
}
