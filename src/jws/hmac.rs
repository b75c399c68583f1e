use alloc::vec::Vec;
use core::fmt;

use crate::{
    base64_url,
    crypto::hmac::Key,
    error::SignError,
    jwa::{self, JsonWebSigningAlgorithm},
    jws::{not_implemented, Validator},
    Error,
};

/// `HS256`, `HS384` and `HS512`.
///
/// Without a secret, signing fails with [`SignError::MissingSecret`] and
/// every signature is rejected.
#[derive(Clone)]
pub struct HmacValidator {
    variant: jwa::Hmac,
    key: Option<Key>,
}

impl fmt::Debug for HmacValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacValidator")
            .field("variant", &self.variant)
            .field("has_secret", &self.key.is_some())
            .finish()
    }
}

impl HmacValidator {
    /// Creates a validator for `variant` without a secret.
    pub const fn new(variant: jwa::Hmac) -> Self {
        Self { variant, key: None }
    }

    /// Creates a validator for an HMAC algorithm identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlgorithmNotImplemented`] if `alg` is not one of the
    /// HMAC algorithms.
    pub fn for_algorithm(alg: &JsonWebSigningAlgorithm) -> Result<Self, Error> {
        match alg {
            JsonWebSigningAlgorithm::Hmac(variant) => Ok(Self::new(*variant)),
            other => Err(not_implemented(other)),
        }
    }

    /// Sets the shared secret.
    #[must_use]
    pub fn with_secret(mut self, secret: impl AsRef<[u8]>) -> Self {
        self.key = Some(Key::new(self.variant, secret.as_ref()));
        self
    }

    /// The variant this validator signs with.
    pub const fn variant(&self) -> jwa::Hmac {
        self.variant
    }
}

impl Validator for HmacValidator {
    fn algorithm(&self) -> JsonWebSigningAlgorithm {
        self.variant.into()
    }

    fn sign(&mut self, msg: &[u8]) -> Result<Vec<u8>, SignError> {
        let key = self.key.as_ref().ok_or(SignError::MissingSecret)?;
        Ok(key.sign(msg))
    }

    fn verify(&self, msg: &[u8], signature: &str) -> Result<bool, Error> {
        let signature = base64_url::decode(signature)?;

        Ok(match &self.key {
            Some(key) => key.verify(msg, &signature),
            None => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwa::RsassaPkcs1V1_5;

    const INPUT: &[u8] = b"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.e30";
    const SIGNATURE: &str = "UGgJ_8f7TlqazSojqRAKzMJ0SUWJCJJ_9jDHe5nrhto";

    #[test]
    fn known_signature() {
        let mut v = HmacValidator::new(jwa::Hmac::Hs256).with_secret("bogokey");
        assert_eq!(base64_url::encode(v.sign(INPUT).unwrap()), SIGNATURE);
        assert!(v.verify(INPUT, SIGNATURE).unwrap());
        assert!(!v.verify(b"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.e31", SIGNATURE).unwrap());
    }

    #[test]
    fn fails_closed_without_secret() {
        let mut v = HmacValidator::new(jwa::Hmac::Hs256);
        assert!(!v.verify(INPUT, SIGNATURE).unwrap());
        assert!(matches!(v.sign(INPUT), Err(SignError::MissingSecret)));
    }

    #[test]
    fn bad_base64_is_malformed() {
        let v = HmacValidator::new(jwa::Hmac::Hs256).with_secret("bogokey");
        assert!(v.verify(INPUT, "badBase64").unwrap_err().is_malformed());
    }

    #[test]
    fn rejects_other_families() {
        let err = HmacValidator::for_algorithm(&RsassaPkcs1V1_5::Rs256.into()).unwrap_err();
        assert!(err.is_not_implemented());
        assert!(HmacValidator::for_algorithm(&jwa::Hmac::Hs512.into()).is_ok());
    }
}
