use alloc::string::String;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The registered claims of [section 4.1 of RFC 7519] next to a set of
/// application specific claims.
///
/// Every registered claim is optional and left out of the JSON when unset.
/// Time values are seconds since the Unix epoch. The application claims `T`
/// are flattened into the same JSON object, so `T` must serialize as a map.
/// By default `T` is a plain JSON object.
///
/// Validating the time based claims is up to the application.
///
/// [section 4.1 of RFC 7519]: <https://datatracker.ietf.org/doc/html/rfc7519#section-4.1>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims<T = Map<String, Value>> {
    /// The principal that issued the token.
    ///
    /// This is serialized as `iss`.
    #[serde(rename = "iss", default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// The principal that is the subject of the token.
    ///
    /// This is serialized as `sub`.
    #[serde(rename = "sub", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// The recipient the token is intended for.
    ///
    /// This is serialized as `aud`. Only the single string form is
    /// supported; a payload carrying an array of audiences does not
    /// deserialize into [`Claims`].
    #[serde(rename = "aud", default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    /// The time on or after which the token must not be accepted.
    ///
    /// This is serialized as `exp`.
    #[serde(rename = "exp", default, skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<u64>,
    /// The time before which the token must not be accepted.
    ///
    /// This is serialized as `nbf`.
    #[serde(rename = "nbf", default, skip_serializing_if = "Option::is_none")]
    pub not_before: Option<u64>,
    /// The time at which the token was issued.
    ///
    /// This is serialized as `iat`.
    #[serde(rename = "iat", default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<u64>,
    /// A unique identifier for the token.
    ///
    /// This is serialized as `jti`.
    #[serde(rename = "jti", default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    /// Application specific claims.
    #[serde(flatten)]
    pub additional: T,
}

impl Claims {
    /// Creates a claim set without any claims, registered or not.
    pub fn empty() -> Self {
        Self::new(Map::new())
    }
}

impl<T> Claims<T> {
    /// Creates a claim set with no registered claims.
    pub const fn new(additional: T) -> Self {
        Self {
            issuer: None,
            subject: None,
            audience: None,
            expiration_time: None,
            not_before: None,
            issued_at: None,
            token_id: None,
            additional,
        }
    }

    /// Sets `iss`.
    #[must_use]
    pub fn with_issuer(mut self, iss: impl Into<String>) -> Self {
        self.issuer = Some(iss.into());
        self
    }

    /// Sets `sub`.
    #[must_use]
    pub fn with_subject(mut self, sub: impl Into<String>) -> Self {
        self.subject = Some(sub.into());
        self
    }

    /// Sets `aud`.
    #[must_use]
    pub fn with_audience(mut self, aud: impl Into<String>) -> Self {
        self.audience = Some(aud.into());
        self
    }

    /// Sets `exp`.
    #[must_use]
    pub const fn with_expiration_time(mut self, exp: u64) -> Self {
        self.expiration_time = Some(exp);
        self
    }

    /// Sets `nbf`.
    #[must_use]
    pub const fn with_not_before(mut self, nbf: u64) -> Self {
        self.not_before = Some(nbf);
        self
    }

    /// Sets `iat`.
    #[must_use]
    pub const fn with_issued_at(mut self, iat: u64) -> Self {
        self.issued_at = Some(iat);
        self
    }

    /// Sets `jti`.
    #[must_use]
    pub fn with_token_id(mut self, jti: impl Into<String>) -> Self {
        self.token_id = Some(jti.into());
        self
    }
}
