use alloc::string::String;

use thiserror::Error;

use crate::base64_url::NoBase64UrlString;

/// The reason a token was rejected as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Malformed {
    /// The compact form did not consist of exactly three `.` separated
    /// fields.
    #[error("expected 3 fields, found {0}")]
    FieldCount(usize),
    /// One of the fields was not valid base64url.
    #[error(transparent)]
    Base64(#[from] NoBase64UrlString),
    /// The header was not a JSON object of the expected shape.
    #[error("the header is not valid JSON")]
    HeaderJson,
    /// The payload did not deserialize into the requested type.
    #[error("the payload is not valid JSON")]
    PayloadJson,
    /// The decoded signature has the wrong size for the algorithm.
    #[error("expected a signature of {expected} bytes, found {actual}")]
    SignatureLength {
        /// The size required by the algorithm.
        expected: usize,
        /// The size found in the token.
        actual: usize,
    },
}

/// Errors that occur while signing a token.
///
/// These indicate a configuration problem on the signing side, not a property
/// of an untrusted token.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SignError {
    /// The validator has no private key to sign with.
    #[error("no private key configured for {0}")]
    MissingPrivateKey(&'static str),
    /// The HMAC validator has no secret to sign with.
    #[error("no HMAC secret configured")]
    MissingSecret,
    /// The header or the payload could not be serialized to JSON.
    #[error("failed to serialize the {0} to JSON")]
    Serialize(&'static str),
    /// The cryptographic backend failed to produce a signature.
    #[error("the signing operation failed")]
    Backend,
    /// The token has not been signed yet, so it has no compact form.
    #[error("the token has not been signed")]
    Unsigned,
}

/// The error type of every fallible operation in this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The token is structurally invalid.
    #[error("malformed token: {0}")]
    MalformedToken(#[from] Malformed),
    /// No validator exists for the requested or declared algorithm.
    #[error("algorithm `{0}` is not implemented")]
    AlgorithmNotImplemented(String),
    /// The signature does not match, or the key needed to check it is
    /// missing.
    #[error("bad signature")]
    BadSignature,
    /// Producing a signature failed.
    #[error(transparent)]
    Sign(#[from] SignError),
}

impl From<NoBase64UrlString> for Error {
    fn from(x: NoBase64UrlString) -> Self {
        Self::MalformedToken(Malformed::Base64(x))
    }
}

impl Error {
    /// Returns `true` for [`Error::MalformedToken`].
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedToken(_))
    }

    /// Returns `true` for [`Error::BadSignature`].
    pub const fn is_bad_signature(&self) -> bool {
        matches!(self, Self::BadSignature)
    }

    /// Returns `true` for [`Error::AlgorithmNotImplemented`].
    pub const fn is_not_implemented(&self) -> bool {
        matches!(self, Self::AlgorithmNotImplemented(_))
    }
}
