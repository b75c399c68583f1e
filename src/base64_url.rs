//! Helpers for the base64url encoded fields of a compact token.
//!
//! Every field is written without `=` padding. When reading, a field may or
//! may not carry its padding: the minimum number of `=` is appended before
//! decoding, so `e30`, `e30=` are the same field.

use alloc::{borrow::Cow, borrow::ToOwned, string::String, vec::Vec};
use core::{fmt, ops::Deref, str::FromStr};

use base64ct::{Base64Url, Base64UrlUnpadded, Encoding};
use thiserror::Error;

/// Error type indicating that one field of the compact representation was
/// not a valid base64url string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the string is not a valid Base64Url representation")]
pub struct NoBase64UrlString;

/// Encodes `bytes` as base64url without padding.
#[inline]
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    Base64UrlUnpadded::encode_string(bytes.as_ref())
}

/// Appends the `=` characters needed to bring `field` to a multiple of four.
///
/// A field whose length is `1 (mod 4)` can never be valid base64, it is
/// padded anyway and left to the decoder to reject.
pub fn add_padding(field: &str) -> Cow<'_, str> {
    match field.len() % 4 {
        0 => Cow::Borrowed(field),
        m => {
            let mut padded = String::with_capacity(field.len() + 4 - m);
            padded.push_str(field);
            padded.extend(core::iter::repeat_n('=', 4 - m));
            Cow::Owned(padded)
        }
    }
}

/// Decodes a single token field, accepting it with or without padding.
///
/// # Errors
///
/// Returns [`NoBase64UrlString`] if the padded field is not valid base64url.
pub fn decode(field: &str) -> Result<Vec<u8>, NoBase64UrlString> {
    if field.len() % 4 == 1 {
        return Err(NoBase64UrlString);
    }

    Base64Url::decode_vec(&add_padding(field)).map_err(|_| NoBase64UrlString)
}

/// A wrapper around a [`String`] that guarantees that the inner string is a
/// valid base64url field.
///
/// The text is kept exactly as it was given, including any padding, because
/// it is the signed material of a token.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct Base64UrlString(String);

impl fmt::Display for Base64UrlString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Base64UrlString {
    type Err = NoBase64UrlString;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s).map(|_| Self(s.to_owned()))
    }
}

impl Base64UrlString {
    /// Creates a new, empty Base64Url string.
    #[inline]
    pub const fn new() -> Self {
        Self(String::new())
    }

    /// Encode the given bytes using the unpadded Base64Url format.
    #[inline]
    pub fn encode(x: impl AsRef<[u8]>) -> Self {
        Base64UrlString(encode(x))
    }

    /// Decodes this string into it's raw byte representation.
    #[inline]
    pub fn decode(&self) -> Vec<u8> {
        // validated on construction
        decode(&self.0).unwrap_or_default()
    }

    /// Return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for Base64UrlString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;

    #[test]
    fn encode_strips_padding() {
        assert_eq!(encode(b"{}"), "e30");
        assert_eq!(encode(b"a\n"), "YQo");
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn padding_for_every_remainder() {
        assert_eq!(add_padding("abcd"), "abcd");
        assert_eq!(add_padding("abc"), "abc=");
        assert_eq!(add_padding("ab"), "ab==");
        assert_eq!(add_padding("a"), "a===");
        assert_eq!(add_padding(""), "");
    }

    #[test]
    fn decode_with_and_without_padding() {
        assert_eq!(decode("e30").unwrap(), b"{}");
        assert_eq!(decode("e30=").unwrap(), b"{}");
        assert_eq!(decode("YQo=").unwrap(), b"a\n");
        assert_eq!(decode("").unwrap(), vec![0u8; 0]);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert_eq!(decode("a"), Err(NoBase64UrlString));
        assert_eq!(decode("badBase64"), Err(NoBase64UrlString));
        assert_eq!(decode("======"), Err(NoBase64UrlString));
        assert_eq!(decode("ab+/"), Err(NoBase64UrlString));
    }

    #[test]
    fn string_keeps_padding_verbatim() {
        let s = Base64UrlString::from_str("e30K").unwrap();
        assert_eq!(&*s, "e30K");
        assert_eq!(s.decode(), b"{}\n");

        let s = Base64UrlString::from_str("YQo=").unwrap();
        assert_eq!(s.to_string(), "YQo=");
    }
}
