use alloc::{borrow::ToOwned, string::String};
use core::{fmt, str::FromStr};

use crate::error::Malformed;

/// The compact representation: the header, payload and signature fields
/// separated by `.`.
///
/// The fields are kept as the exact text that was parsed or produced. The
/// header and payload are the signed material, so they are never re-encoded.
/// The signature field is left undecoded, since its encoding is for the
/// selected algorithm to interpret.
///
/// # Examples
///
/// ```
/// # use compact_jws::format::Compact;
/// # fn main() {
/// let c: Compact = "eyJhbGciOiJub25lIn0.e30.".parse().unwrap();
///
/// assert_eq!(c.header(), "eyJhbGciOiJub25lIn0");
/// assert_eq!(c.payload(), "e30");
/// assert_eq!(c.signature(), "");
/// assert_eq!(c.to_string(), "eyJhbGciOiJub25lIn0.e30.");
///
/// assert!("abc.def".parse::<Compact>().is_err());
/// # }
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Compact {
    header: String,
    payload: String,
    signature: String,
}

impl Compact {
    pub(crate) fn new(header: &str, payload: &str, signature: &str) -> Self {
        Self {
            header: header.to_owned(),
            payload: payload.to_owned(),
            signature: signature.to_owned(),
        }
    }

    /// The encoded header field.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The encoded payload field.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The encoded signature field.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Returns `header "." payload`, the input of every signing algorithm.
    pub fn signing_input(&self) -> String {
        signing_input(&self.header, &self.payload)
    }
}

pub(crate) fn signing_input(header: &str, payload: &str) -> String {
    let mut input = String::with_capacity(header.len() + payload.len() + 1);
    input.push_str(header);
    input.push('.');
    input.push_str(payload);
    input
}

impl FromStr for Compact {
    type Err = Malformed;

    /// Splits the input on `.`, requiring exactly three fields.
    ///
    /// No field is decoded here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');

        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(payload), Some(signature), None) => Ok(Self {
                header: header.to_owned(),
                payload: payload.to_owned(),
                signature: signature.to_owned(),
            }),
            _ => Err(Malformed::FieldCount(s.split('.').count())),
        }
    }
}

impl fmt::Display for Compact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.header, self.payload, self.signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_three_fields() {
        assert_eq!(Compact::from_str(""), Err(Malformed::FieldCount(1)));
        assert_eq!(Compact::from_str("abc.def"), Err(Malformed::FieldCount(2)));
        assert_eq!(Compact::from_str("a.b.c.d"), Err(Malformed::FieldCount(4)));
        assert!(Compact::from_str("..").is_ok());
    }

    #[test]
    fn fields_are_kept_verbatim() {
        let c = Compact::from_str("YQo=.e30K.badBase64").unwrap();
        assert_eq!(c.header(), "YQo=");
        assert_eq!(c.payload(), "e30K");
        assert_eq!(c.signature(), "badBase64");
        assert_eq!(c.signing_input(), "YQo=.e30K");
    }
}
