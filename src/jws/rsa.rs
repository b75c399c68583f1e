use alloc::vec::Vec;
use core::fmt;

use crate::{
    base64_url,
    crypto::rsa::{self, RsaPrivateKey, RsaPublicKey},
    error::SignError,
    jwa::{JsonWebSigningAlgorithm, RsassaPkcs1V1_5},
    jws::{not_implemented, Validator},
    Error,
};

/// `RS256`, `RS384` and `RS512` (RSASSA-PKCS1-v1_5).
///
/// Signing requires the private key and verification the public key. Setting
/// only the private key also sets the matching public key.
#[derive(Clone)]
pub struct RsaValidator {
    variant: RsassaPkcs1V1_5,
    private: Option<RsaPrivateKey>,
    public: Option<RsaPublicKey>,
}

impl fmt::Debug for RsaValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaValidator")
            .field("variant", &self.variant)
            .field("has_private_key", &self.private.is_some())
            .field("public", &self.public)
            .finish()
    }
}

impl RsaValidator {
    /// Creates a validator for `variant` without any keys.
    pub const fn new(variant: RsassaPkcs1V1_5) -> Self {
        Self {
            variant,
            private: None,
            public: None,
        }
    }

    /// Creates a validator for an RSA algorithm identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlgorithmNotImplemented`] if `alg` is not one of the
    /// RSASSA-PKCS1-v1_5 algorithms.
    pub fn for_algorithm(alg: &JsonWebSigningAlgorithm) -> Result<Self, Error> {
        match alg {
            JsonWebSigningAlgorithm::Rsa(variant) => Ok(Self::new(*variant)),
            other => Err(not_implemented(other)),
        }
    }

    /// Sets the private key used for signing.
    #[must_use]
    pub fn with_private_key(mut self, key: RsaPrivateKey) -> Self {
        if self.public.is_none() {
            self.public = Some(key.to_public_key());
        }
        self.private = Some(key);
        self
    }

    /// Sets the public key used for verification.
    #[must_use]
    pub fn with_public_key(mut self, key: RsaPublicKey) -> Self {
        self.public = Some(key);
        self
    }

    /// The variant this validator signs with.
    pub const fn variant(&self) -> RsassaPkcs1V1_5 {
        self.variant
    }
}

impl Validator for RsaValidator {
    fn algorithm(&self) -> JsonWebSigningAlgorithm {
        self.variant.into()
    }

    fn sign(&mut self, msg: &[u8]) -> Result<Vec<u8>, SignError> {
        let key = self
            .private
            .as_ref()
            .ok_or(SignError::MissingPrivateKey("RSA"))?;

        rsa::sign(key, self.variant, msg).map_err(|_| SignError::Backend)
    }

    fn verify(&self, msg: &[u8], signature: &str) -> Result<bool, Error> {
        let key = self.public.as_ref().ok_or(Error::BadSignature)?;
        let signature = base64_url::decode(signature)?;

        Ok(rsa::verify(key, self.variant, msg, &signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys() {
        let mut v = RsaValidator::new(RsassaPkcs1V1_5::Rs256);
        assert!(matches!(
            v.sign(b"a.b"),
            Err(SignError::MissingPrivateKey(_))
        ));
        assert!(v.verify(b"a.b", "YQo").unwrap_err().is_bad_signature());
    }

    #[test]
    fn rejects_other_families() {
        let err = RsaValidator::for_algorithm(&JsonWebSigningAlgorithm::None).unwrap_err();
        assert!(err.is_not_implemented());
    }
}
