//! Inline `ENC[...]` tags.
//!
//! A tag is `ENC[` followed by an optional `method,` prefix and a payload,
//! closed by the first `]`. The method name cannot contain `,` or `]`; the
//! payload cannot contain `]`. A tag without a method uses
//! [`DEFAULT_METHOD`](crate::core::constants::DEFAULT_METHOD).
//!
//! Scanning is purely textual: it never parses the surrounding document and
//! never looks inside payloads.

use std::collections::BTreeSet;
use std::ops::Range;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::core::constants::{DEFAULT_METHOD, TAG_CLOSE, TAG_METHOD_SEPARATOR, TAG_OPEN};
use crate::error::{CipherError, Result};

/// A single well-formed tag found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Method named in the tag, if any.
    pub method: Option<&'a str>,
    /// Raw payload between the separator (or `ENC[`) and `]`.
    pub payload: &'a str,
    /// Byte range of the whole tag in the scanned text.
    pub span: Range<usize>,
}

impl<'a> Tag<'a> {
    /// Method this tag is encrypted with, falling back to the default.
    pub fn method_or_default(&self) -> &'a str {
        self.method.unwrap_or(DEFAULT_METHOD)
    }

    /// Decode the base64 payload into ciphertext bytes.
    ///
    /// Whitespace inside the payload is ignored so that block-formatted
    /// values spanning several lines decode the same as inline ones.
    pub fn ciphertext(&self) -> Result<Vec<u8>> {
        decode_payload(self.method_or_default(), self.payload)
    }
}

/// Iterator over the tags of a text, in order of appearance.
pub struct Tags<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tags<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Tag<'a>> {
        let start = self.pos + self.text[self.pos..].find(TAG_OPEN)?;
        let body_start = start + TAG_OPEN.len();
        // No closing bracket anywhere after this point means no later tag can close either.
        let body_end = body_start + self.text[body_start..].find(TAG_CLOSE)?;
        let end = body_end + TAG_CLOSE.len_utf8();
        self.pos = end;

        let body = &self.text[body_start..body_end];
        let (method, payload) = match body.split_once(TAG_METHOD_SEPARATOR) {
            Some((method, payload)) if !method.is_empty() => (Some(method), payload),
            _ => (None, body),
        };

        Some(Tag {
            method,
            payload,
            span: start..end,
        })
    }
}

/// Iterate over every well-formed tag in `text`.
pub fn tags(text: &str) -> Tags<'_> {
    Tags { text, pos: 0 }
}

/// Distinct encryption methods referenced by the tags in `text`.
///
/// Tags without a method contribute the default method. Text without tags,
/// or with only unterminated ones, yields an empty set.
pub fn scan(text: &str) -> BTreeSet<String> {
    tags(text)
        .map(|tag| tag.method_or_default().to_string())
        .collect()
}

/// Rewrite `text`, replacing each tag with the output of `f`.
///
/// Stops at the first error; nothing partial is returned.
pub fn replace<F>(text: &str, mut f: F) -> Result<String>
where
    F: FnMut(&Tag<'_>) -> Result<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for tag in tags(text) {
        out.push_str(&text[last..tag.span.start]);
        out.push_str(&f(&tag)?);
        last = tag.span.end;
    }
    out.push_str(&text[last..]);
    Ok(out)
}

/// Render ciphertext as a single-line `ENC[method,payload]` tag.
pub fn render(method: &str, ciphertext: &[u8]) -> String {
    format!(
        "{}{}{}{}{}",
        TAG_OPEN,
        method,
        TAG_METHOD_SEPARATOR,
        STANDARD.encode(ciphertext),
        TAG_CLOSE
    )
}

fn decode_payload(method: &str, payload: &str) -> Result<Vec<u8>> {
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD.decode(compact).map_err(|e| {
        CipherError::InvalidPayload {
            method: method.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
