//! SHA-256 digest utilities
//!
//! All digests are rendered as 64 lowercase hex characters with no prefix,
//! which is the format the mod loader expects in `Update.FileHashes`.

use sha2::{Digest, Sha256};
use std::borrow::Cow;

/// Compute the SHA-256 digest of raw bytes as lowercase hex.
pub fn sha256_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Remove every carriage-return byte (`0x0D`) without inserting anything.
pub fn strip_carriage_returns(content: &[u8]) -> Cow<'_, [u8]> {
    if !content.contains(&b'\r') {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.iter().copied().filter(|&b| b != b'\r').collect())
}

/// Translate `\r\n` and lone `\r` line endings to `\n`.
///
/// This is the universal-newline read used for text files, so a checkout
/// with CRLF endings digests the same as one with LF endings.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
