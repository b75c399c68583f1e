use alloc::vec::Vec;
use core::fmt;

use secrecy::{ExposeSecret, SecretBox};

use crate::{
    crypto::{
        ec::{SigningKey, VerifyingKey},
        rsa::{RsaPrivateKey, RsaPublicKey},
    },
    jwa::EcDSA,
};

/// The key material the [registry](crate::registry) hands to the validators
/// it builds.
///
/// Every key is optional. A validator built from a set that lacks its key
/// cannot sign, and rejects every signature (see the individual validators
/// for how exactly).
///
/// ```
/// # use compact_jws::KeySet;
/// let keys = KeySet::new().with_hmac_secret(b"bogokey".to_vec());
/// ```
pub struct KeySet {
    hmac_secret: Option<SecretBox<[u8]>>,
    rsa_private: Option<RsaPrivateKey>,
    rsa_public: Option<RsaPublicKey>,
    ec_signing: Vec<SigningKey>,
    ec_verifying: Vec<VerifyingKey>,
}

impl fmt::Debug for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySet")
            .field("hmac_secret", &self.hmac_secret.is_some())
            .field("rsa_private", &self.rsa_private.is_some())
            .field("rsa_public", &self.rsa_public.is_some())
            .field("ec_signing", &self.ec_signing)
            .field("ec_verifying", &self.ec_verifying)
            .finish()
    }
}

impl Default for KeySet {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySet {
    /// Creates an empty key set.
    pub const fn new() -> Self {
        Self {
            hmac_secret: None,
            rsa_private: None,
            rsa_public: None,
            ec_signing: Vec::new(),
            ec_verifying: Vec::new(),
        }
    }

    /// Sets the secret shared by all HMAC algorithms.
    #[must_use]
    pub fn with_hmac_secret(mut self, secret: impl Into<Vec<u8>>) -> Self {
        self.hmac_secret = Some(SecretBox::new(secret.into().into_boxed_slice()));
        self
    }

    /// Sets the RSA private key, used for signing with every RSA algorithm.
    #[must_use]
    pub fn with_rsa_private_key(mut self, key: RsaPrivateKey) -> Self {
        self.rsa_private = Some(key);
        self
    }

    /// Sets the RSA public key, used for verifying with every RSA algorithm.
    ///
    /// Without it, the public half of the private key is used.
    #[must_use]
    pub fn with_rsa_public_key(mut self, key: RsaPublicKey) -> Self {
        self.rsa_public = Some(key);
        self
    }

    /// Adds an ECDSA private key, replacing a previous key for the same
    /// curve.
    #[must_use]
    pub fn with_ec_signing_key(mut self, key: impl Into<SigningKey>) -> Self {
        let key = key.into();
        self.ec_signing.retain(|k| k.algorithm() != key.algorithm());
        self.ec_signing.push(key);
        self
    }

    /// Adds an ECDSA public key, replacing a previous key for the same curve.
    ///
    /// Without it, the public half of the private key of that curve is used.
    #[must_use]
    pub fn with_ec_verifying_key(mut self, key: impl Into<VerifyingKey>) -> Self {
        let key = key.into();
        self.ec_verifying.retain(|k| k.algorithm() != key.algorithm());
        self.ec_verifying.push(key);
        self
    }

    pub(crate) fn hmac_secret(&self) -> Option<&[u8]> {
        self.hmac_secret.as_ref().map(|s| s.expose_secret())
    }

    pub(crate) fn rsa_private_key(&self) -> Option<&RsaPrivateKey> {
        self.rsa_private.as_ref()
    }

    pub(crate) fn rsa_public_key(&self) -> Option<&RsaPublicKey> {
        self.rsa_public.as_ref()
    }

    pub(crate) fn ec_signing_key(&self, alg: EcDSA) -> Option<&SigningKey> {
        self.ec_signing.iter().find(|k| k.algorithm() == alg)
    }

    pub(crate) fn ec_verifying_key(&self, alg: EcDSA) -> Option<&VerifyingKey> {
        self.ec_verifying.iter().find(|k| k.algorithm() == alg)
    }
}

#[cfg(test)]
mod tests {
    use rand_core::OsRng;

    use super::*;

    #[test]
    fn debug_hides_the_secret() {
        let keys = KeySet::new().with_hmac_secret(b"bogokey".to_vec());
        let debug = alloc::format!("{keys:?}");
        assert!(!debug.contains("bogokey"));
        assert_eq!(keys.hmac_secret(), Some(&b"bogokey"[..]));
    }

    #[test]
    fn one_ec_key_per_curve() {
        let first = SigningKey::random(EcDSA::Es256, &mut OsRng);
        let second = SigningKey::random(EcDSA::Es256, &mut OsRng);
        let expected = second.verifying_key();

        let keys = KeySet::new()
            .with_ec_signing_key(first)
            .with_ec_signing_key(second)
            .with_ec_signing_key(SigningKey::random(EcDSA::Es512, &mut OsRng));

        let sig = keys
            .ec_signing_key(EcDSA::Es256)
            .unwrap()
            .sign(&mut OsRng, b"message")
            .unwrap();
        assert_eq!(expected.verify(b"message", &sig), Ok(true));
        assert!(keys.ec_signing_key(EcDSA::Es384).is_none());
        assert!(keys.ec_signing_key(EcDSA::Es512).is_some());
    }
}
