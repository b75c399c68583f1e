use alloc::vec::Vec;
use core::fmt;

use rand_core::{CryptoRngCore, OsRng};

use crate::{
    base64_url,
    crypto::ec::{SigningKey, VerifyingKey},
    error::SignError,
    jwa::{EcDSA, JsonWebSigningAlgorithm},
    jws::{not_implemented, Validator},
    Error,
};

/// `ES256`, `ES384` and `ES512`.
///
/// ECDSA signatures need fresh randomness. The generator `R` is owned by the
/// validator, which is why signing takes `&mut self`. It defaults to the
/// operating system generator; tests can inject a fixed one through
/// [`with_rng`](Self::with_rng) to get reproducible signatures.
///
/// Keys for a curve other than the one of the variant are ignored.
#[derive(Clone)]
pub struct EcdsaValidator<R = OsRng> {
    variant: EcDSA,
    signing: Option<SigningKey>,
    verifying: Option<VerifyingKey>,
    rng: R,
}

impl<R> fmt::Debug for EcdsaValidator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdsaValidator")
            .field("variant", &self.variant)
            .field("has_signing_key", &self.signing.is_some())
            .field("verifying", &self.verifying)
            .finish_non_exhaustive()
    }
}

impl EcdsaValidator {
    /// Creates a validator for `variant` without any keys, signing with the
    /// operating system generator.
    pub const fn new(variant: EcDSA) -> Self {
        Self {
            variant,
            signing: None,
            verifying: None,
            rng: OsRng,
        }
    }

    /// Creates a validator for an ECDSA algorithm identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlgorithmNotImplemented`] if `alg` is not one of the
    /// ECDSA algorithms.
    pub fn for_algorithm(alg: &JsonWebSigningAlgorithm) -> Result<Self, Error> {
        match alg {
            JsonWebSigningAlgorithm::EcDSA(variant) => Ok(Self::new(*variant)),
            other => Err(not_implemented(other)),
        }
    }
}

impl<R> EcdsaValidator<R> {
    /// Replaces the random generator used for signing.
    pub fn with_rng<R2: CryptoRngCore>(self, rng: R2) -> EcdsaValidator<R2> {
        EcdsaValidator {
            variant: self.variant,
            signing: self.signing,
            verifying: self.verifying,
            rng,
        }
    }

    /// Sets the private key used for signing, and its public half for
    /// verification unless a verifying key was set before.
    #[must_use]
    pub fn with_signing_key(mut self, key: SigningKey) -> Self {
        if key.algorithm() == self.variant {
            if self.verifying.is_none() {
                self.verifying = Some(key.verifying_key());
            }
            self.signing = Some(key);
        }
        self
    }

    /// Sets the public key used for verification.
    #[must_use]
    pub fn with_verifying_key(mut self, key: VerifyingKey) -> Self {
        if key.algorithm() == self.variant {
            self.verifying = Some(key);
        }
        self
    }

    /// The variant this validator signs with.
    pub const fn variant(&self) -> EcDSA {
        self.variant
    }
}

impl<R: CryptoRngCore> Validator for EcdsaValidator<R> {
    fn algorithm(&self) -> JsonWebSigningAlgorithm {
        self.variant.into()
    }

    fn sign(&mut self, msg: &[u8]) -> Result<Vec<u8>, SignError> {
        let key = self
            .signing
            .as_ref()
            .ok_or(SignError::MissingPrivateKey("ECDSA"))?;

        key.sign(&mut self.rng, msg).map_err(|_| SignError::Backend)
    }

    fn verify(&self, msg: &[u8], signature: &str) -> Result<bool, Error> {
        let key = self.verifying.as_ref().ok_or(Error::BadSignature)?;
        let signature = base64_url::decode(signature)?;

        Ok(key.verify(msg, &signature)?)
    }
}

#[cfg(test)]
mod tests {
    use rand_core::{impls, CryptoRng, RngCore};

    use super::*;
    use crate::error::Malformed;

    /// A generator that only ever yields zeros.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            impls::fill_bytes_via_next(self, dest);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ZeroRng {}

    fn validator(variant: EcDSA) -> EcdsaValidator {
        EcdsaValidator::new(variant).with_signing_key(SigningKey::random(variant, &mut OsRng))
    }

    #[test]
    fn sign_and_verify() {
        for variant in [EcDSA::Es256, EcDSA::Es384, EcDSA::Es512] {
            let mut v = validator(variant);
            let sig = base64_url::encode(v.sign(b"a.b").unwrap());

            assert!(v.verify(b"a.b", &sig).unwrap(), "{variant:?}");
            assert!(!v.verify(b"a.c", &sig).unwrap(), "{variant:?}");
        }
    }

    #[test]
    fn fixed_rng_is_reproducible() {
        let key = SigningKey::random(EcDSA::Es256, &mut OsRng);
        let mut v = EcdsaValidator::new(EcDSA::Es256)
            .with_signing_key(key)
            .with_rng(ZeroRng);

        assert_eq!(v.sign(b"a.b").unwrap(), v.sign(b"a.b").unwrap());
    }

    #[test]
    fn wrong_length_is_malformed() {
        let v = validator(EcDSA::Es256);
        let err = v.verify(b"a.b", &base64_url::encode([0u8; 63])).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedToken(Malformed::SignatureLength {
                expected: 64,
                actual: 63
            })
        ));
    }

    #[test]
    fn missing_keys() {
        let mut v = EcdsaValidator::new(EcDSA::Es384);
        assert!(matches!(
            v.sign(b"a.b"),
            Err(SignError::MissingPrivateKey(_))
        ));
        assert!(v.verify(b"a.b", "").unwrap_err().is_bad_signature());
    }

    #[test]
    fn keys_of_other_curves_are_ignored() {
        let key = SigningKey::random(EcDSA::Es256, &mut OsRng);
        let v = EcdsaValidator::new(EcDSA::Es384).with_signing_key(key);
        assert!(v.verify(b"a.b", "").unwrap_err().is_bad_signature());
    }
}
