//! Editable `DEC::method[plaintext]!` markers.
//!
//! Decrypting an eyaml file turns each `ENC[...]` tag into a marker that
//! keeps the method name next to the plaintext, so the value can be edited
//! and encrypted again with the same method. An empty method
//! (`DEC::[plaintext]!`) means "use the requested encryption method".
//!
//! Inside the brackets `\\` and `\]` stand for a literal backslash and
//! bracket, so any plaintext survives a decrypt/encrypt round trip. Other
//! backslashes are kept as typed.

use std::borrow::Cow;
use std::ops::Range;

use crate::core::constants::{MARKER_CLOSE, MARKER_ESCAPE, MARKER_OPEN};
use crate::error::Result;

/// A decrypted value waiting to be encrypted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Method to encrypt with, if the marker names one.
    pub method: Option<&'a str>,
    /// Unescaped plaintext between `[` and `]!`.
    pub plaintext: Cow<'a, str>,
    /// Byte range of the whole marker.
    pub span: Range<usize>,
}

/// Iterate over every complete marker in `text`.
pub fn markers(text: &str) -> impl Iterator<Item = Marker<'_>> {
    let mut pos = 0;
    std::iter::from_fn(move || loop {
        let start = pos + text[pos..].find(MARKER_OPEN)?;
        let method_start = start + MARKER_OPEN.len();
        let Some(bracket) = text[method_start..].find('[') else {
            return None;
        };
        let method = &text[method_start..method_start + bracket];

        // Method names are single words; anything else is not a marker.
        if method.chars().any(|c| c.is_whitespace() || c == ']') {
            pos = method_start;
            continue;
        }

        let body_start = method_start + bracket + 1;
        let body_end = body_start + find_close(&text[body_start..])?;
        let end = body_end + MARKER_CLOSE.len();
        pos = end;

        return Some(Marker {
            method: (!method.is_empty()).then_some(method),
            plaintext: unescape(&text[body_start..body_end]),
            span: start..end,
        });
    })
}

/// Offset of the first `]!` whose bracket is not escaped.
fn find_close(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == MARKER_ESCAPE as u8 && matches!(bytes.get(i + 1), Some(b'\\' | b']')) {
            i += 2;
        } else if bytes[i..].starts_with(MARKER_CLOSE.as_bytes()) {
            return Some(i);
        } else {
            i += 1;
        }
    }
    None
}

fn unescape(body: &str) -> Cow<'_, str> {
    if !body.contains(MARKER_ESCAPE) {
        return Cow::Borrowed(body);
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c == MARKER_ESCAPE {
            if let Some(&next) = chars.peek().filter(|&&n| n == MARKER_ESCAPE || n == ']') {
                out.push(next);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Rewrite `text`, replacing each marker with the output of `f`.
pub fn replace<F>(text: &str, mut f: F) -> Result<String>
where
    F: FnMut(&Marker<'_>) -> Result<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for marker in markers(text) {
        out.push_str(&text[last..marker.span.start]);
        out.push_str(&f(&marker)?);
        last = marker.span.end;
    }
    out.push_str(&text[last..]);
    Ok(out)
}

/// Render plaintext as an editable marker, escaping `\\` and `]`.
pub fn render(method: &str, plaintext: &str) -> String {
    let mut out = String::with_capacity(MARKER_OPEN.len() + method.len() + plaintext.len() + 3);
    out.push_str(MARKER_OPEN);
    out.push_str(method);
    out.push('[');
    for c in plaintext.chars() {
        if c == MARKER_ESCAPE || c == ']' {
            out.push(MARKER_ESCAPE);
        }
        out.push(c);
    }
    out.push_str(MARKER_CLOSE);
    out
}
