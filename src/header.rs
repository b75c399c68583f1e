//! The JOSE header of a compact token as defined by [section 4 of RFC 7515].
//!
//! [section 4 of RFC 7515]: <https://datatracker.ietf.org/doc/html/rfc7515#section-4>

use alloc::string::{String, ToString};

use serde::{Deserialize, Serialize};

use crate::jwa::JsonWebSigningAlgorithm;

/// The media type written into `typ` for newly created tokens.
pub(crate) const DEFAULT_MEDIA_TYPE: &str = "JWT";

/// (De-)serializable representation of the header of a token.
///
/// Unknown parameters are ignored when parsing. The algorithm is always
/// serialized first, followed by `typ`, so a freshly built header for `HS256`
/// encodes as `{"alg":"HS256","typ":"JWT"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Identifies the cryptographic algorithm used to secure the token.
    ///
    /// This is serialized as `alg`.
    #[serde(rename = "alg")]
    pub algorithm: JsonWebSigningAlgorithm,
    /// This is used by the application to determine the type
    /// of the token.
    ///
    /// This is serialized as `typ`.
    #[serde(rename = "typ", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// This is used by the application to determine the type
    /// of content in the payload.
    ///
    /// This is serialized as `cty`.
    #[serde(rename = "cty", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Hint indicating which key was used to secure the token.
    ///
    /// This is serialized as `kid`.
    #[serde(rename = "kid", default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

impl Header {
    /// Creates a header for the given algorithm with `typ` set to `JWT`.
    pub fn new(algorithm: JsonWebSigningAlgorithm) -> Self {
        Self {
            algorithm,
            media_type: Some(DEFAULT_MEDIA_TYPE.to_string()),
            content_type: None,
            key_id: None,
        }
    }

    /// Sets the `kid` parameter.
    #[must_use]
    pub fn with_key_id(mut self, kid: impl Into<String>) -> Self {
        self.key_id = Some(kid.into());
        self
    }

    /// Sets the `cty` parameter.
    #[must_use]
    pub fn with_content_type(mut self, cty: impl Into<String>) -> Self {
        self.content_type = Some(cty.into());
        self
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new(JsonWebSigningAlgorithm::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwa::Hmac;

    #[test]
    fn compact_serialization() {
        let header = Header::new(Hmac::Hs256.into());
        let json = serde_json::to_string(&header).unwrap();
        assert_eq!(json, r#"{"alg":"HS256","typ":"JWT"}"#);
    }

    #[test]
    fn optional_parameters_follow_typ() {
        let header = Header::new(Hmac::Hs256.into()).with_key_id("k1");
        let json = serde_json::to_string(&header).unwrap();
        assert_eq!(json, r#"{"alg":"HS256","typ":"JWT","kid":"k1"}"#);
    }

    #[test]
    fn typ_is_optional_when_parsing() {
        let header: Header = serde_json::from_str("{\"alg\":\"none\"}\n").unwrap();
        assert_eq!(header.algorithm, JsonWebSigningAlgorithm::None);
        assert_eq!(header.media_type, None);
    }

    #[test]
    fn alg_is_required() {
        assert!(serde_json::from_str::<Header>(r#"{"typ":"JWT"}"#).is_err());
    }
}
