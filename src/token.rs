use alloc::{borrow::ToOwned, string::String};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    base64_url,
    error::{Malformed, SignError},
    format::{signing_input, Compact},
    header::Header,
    jws::Validator,
    Base64UrlString, Error, Verified,
};

/// The encoded header and payload fields a signature was computed over.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawFields {
    header: Base64UrlString,
    payload: Base64UrlString,
}

impl RawFields {
    fn signing_input(&self) -> String {
        signing_input(&self.header, &self.payload)
    }
}

/// Serializes `header` and `payload` to compact JSON and encodes both as
/// unpadded base64url.
///
/// The returned fields joined by `.` are the exact bytes a signature covers.
/// The algorithm must already be set on `header`, since it is part of the
/// signed material.
///
/// # Errors
///
/// Returns [`SignError::Serialize`] if either value fails to serialize.
pub fn encode_fields<P: Serialize + ?Sized>(
    header: &Header,
    payload: &P,
) -> Result<(Base64UrlString, Base64UrlString), SignError> {
    let header = serde_json::to_vec(header).map_err(|_| SignError::Serialize("header"))?;
    let payload = serde_json::to_vec(payload).map_err(|_| SignError::Serialize("payload"))?;

    Ok((
        Base64UrlString::encode(header),
        Base64UrlString::encode(payload),
    ))
}

/// A JSON Web Signature in compact serialization, carrying a payload of
/// type `P`.
///
/// A token is either built with [`Token::new`] and then signed, or parsed
/// from its compact form with [`Token::parse`]. A parsed token keeps the
/// header and payload fields exactly as they appeared in the input, and
/// [`validate_with`](Self::validate_with) checks the signature over those
/// fields instead of a re-serialization of the parsed values.
///
/// Mutating the header or payload drops the encoded fields and the signature,
/// so the token has to be signed again before it can be serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<P> {
    header: Header,
    payload: P,
    raw: Option<RawFields>,
    signature: String,
}

impl<P> Token<P> {
    /// Creates an unsigned token with a default header.
    pub fn new(payload: P) -> Self {
        Self::with_header(Header::default(), payload)
    }

    /// Creates an unsigned token with the given header.
    ///
    /// The algorithm of the header is overwritten when signing.
    pub const fn with_header(header: Header, payload: P) -> Self {
        Self {
            header,
            payload,
            raw: None,
            signature: String::new(),
        }
    }

    /// The header of this token.
    ///
    /// For a parsed token, the algorithm in here is the one the token
    /// declares, which is not necessarily the one the caller expects.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Mutable access to the header. Unsigns the token.
    pub fn header_mut(&mut self) -> &mut Header {
        self.unsign();
        &mut self.header
    }

    /// The payload of this token.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Mutable access to the payload. Unsigns the token.
    pub fn payload_mut(&mut self) -> &mut P {
        self.unsign();
        &mut self.payload
    }

    /// Consumes the token and returns its payload.
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// The encoded signature field. Empty for unsigned tokens and for tokens
    /// using the `none` algorithm.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Whether this token has encoded fields, either from parsing or from
    /// signing.
    pub fn is_signed(&self) -> bool {
        self.raw.is_some()
    }

    /// Returns the compact representation of this token.
    ///
    /// # Errors
    ///
    /// Returns [`SignError::Unsigned`] if the token was neither parsed nor
    /// signed.
    pub fn compact(&self) -> Result<Compact, SignError> {
        let raw = self.raw.as_ref().ok_or(SignError::Unsigned)?;
        Ok(Compact::new(&raw.header, &raw.payload, &self.signature))
    }

    /// Checks the signature of this token with `validator`.
    ///
    /// The validator is used as given, whatever algorithm the header
    /// declares, which makes this the way to pin an algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`SignError::Unsigned`] for a token that has no encoded fields,
    /// and otherwise whatever [`Validator::verify`] returns.
    pub fn validate_with(&self, validator: &dyn Validator) -> Result<bool, Error> {
        let raw = self.raw.as_ref().ok_or(SignError::Unsigned)?;
        validator.verify(raw.signing_input().as_bytes(), &self.signature)
    }

    /// Like [`validate_with`](Self::validate_with), but turns a mismatch
    /// into [`Error::BadSignature`] and wraps the token as [`Verified`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadSignature`] if the signature does not match, and
    /// the errors of [`validate_with`](Self::validate_with) otherwise.
    pub fn verify(self, validator: &dyn Validator) -> Result<Verified<Self>, Error> {
        if self.validate_with(validator)? {
            Ok(Verified(self))
        } else {
            Err(Error::BadSignature)
        }
    }

    fn unsign(&mut self) {
        self.raw = None;
        self.signature.clear();
    }
}

impl<P: Serialize> Token<P> {
    /// Signs this token with `validator`.
    ///
    /// The `alg` header parameter is set to the algorithm of the validator,
    /// then the header and payload are encoded and signed. Any previous
    /// encoded fields and signature are replaced. On failure the token is
    /// left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sign`] if serializing or signing fails.
    pub fn sign_with(&mut self, validator: &mut dyn Validator) -> Result<(), Error> {
        let mut header = self.header.clone();
        header.algorithm = validator.algorithm();

        let (raw_header, raw_payload) = encode_fields(&header, &self.payload)?;
        let raw = RawFields {
            header: raw_header,
            payload: raw_payload,
        };
        let signature = validator.sign(raw.signing_input().as_bytes())?;

        self.header = header;
        self.raw = Some(raw);
        self.signature = base64_url::encode(signature);
        Ok(())
    }
}

impl<P: DeserializeOwned> Token<P> {
    /// Parses a token from its compact form without checking the signature.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedToken`] if the input does not have exactly
    /// three fields, if the header or payload is not valid base64url, or if
    /// either does not deserialize.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let compact: Compact = input.parse()?;
        Self::from_compact(&compact)
    }

    /// Reads a token out of an already split compact form.
    ///
    /// # Errors
    ///
    /// See [`Token::parse`].
    pub fn from_compact(compact: &Compact) -> Result<Self, Error> {
        let raw_header: Base64UrlString = compact.header().parse()?;
        let header: Header =
            serde_json::from_slice(&raw_header.decode()).map_err(|_| Malformed::HeaderJson)?;

        let raw_payload: Base64UrlString = compact.payload().parse()?;
        let payload: P =
            serde_json::from_slice(&raw_payload.decode()).map_err(|_| Malformed::PayloadJson)?;

        Ok(Self {
            header,
            payload,
            raw: Some(RawFields {
                header: raw_header,
                payload: raw_payload,
            }),
            signature: compact.signature().to_owned(),
        })
    }
}
