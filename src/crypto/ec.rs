//! The primitives for working with ECDSA over the NIST curves P-256, P-384
//! and P-521.
//!
//! Signatures on the wire are the fixed width concatenation `r || s`, each
//! half left padded with zeros to the coordinate size of the curve (32, 48
//! and 66 bytes).

use alloc::{vec, vec::Vec};

use rand_core::CryptoRngCore;
use signature::{RandomizedSigner as _, Verifier as _};
use thiserror::Error;

use crate::{error::Malformed, jwa::EcDSA};

/// The key material did not describe a valid key for the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {0} key")]
pub struct InvalidKey(&'static str);

/// A private ECDSA key for one of the supported curves.
#[derive(Clone)]
#[non_exhaustive]
pub enum SigningKey {
    /// A P-256 key, used by `ES256`.
    P256(p256::ecdsa::SigningKey),
    /// A P-384 key, used by `ES384`.
    P384(p384::ecdsa::SigningKey),
    /// A P-521 key, used by `ES512`.
    P521(p521::ecdsa::SigningKey),
}

/// A public ECDSA key for one of the supported curves.
#[derive(Clone)]
#[non_exhaustive]
pub enum VerifyingKey {
    /// A P-256 key, used by `ES256`.
    P256(p256::ecdsa::VerifyingKey),
    /// A P-384 key, used by `ES384`.
    P384(p384::ecdsa::VerifyingKey),
    /// A P-521 key, used by `ES512`.
    P521(p521::ecdsa::VerifyingKey),
}

impl core::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SigningKey")
            .field("curve", &self.algorithm().curve_name())
            .finish_non_exhaustive()
    }
}

impl core::fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VerifyingKey")
            .field("curve", &self.algorithm().curve_name())
            .finish_non_exhaustive()
    }
}

impl SigningKey {
    /// Creates a key from the big endian private scalar `d`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKey`] if `d` has the wrong size or is out of range.
    pub fn from_slice(alg: EcDSA, d: &[u8]) -> Result<Self, InvalidKey> {
        let invalid = InvalidKey(alg.curve_name());

        Ok(match alg {
            EcDSA::Es256 => {
                Self::P256(p256::ecdsa::SigningKey::from_slice(d).map_err(|_| invalid)?)
            }
            EcDSA::Es384 => {
                Self::P384(p384::ecdsa::SigningKey::from_slice(d).map_err(|_| invalid)?)
            }
            EcDSA::Es512 => {
                Self::P521(p521::ecdsa::SigningKey::from_slice(d).map_err(|_| invalid)?)
            }
        })
    }

    /// Generates a new key using the given random generator.
    pub fn random(alg: EcDSA, rng: &mut impl CryptoRngCore) -> Self {
        match alg {
            EcDSA::Es256 => Self::P256(p256::ecdsa::SigningKey::random(rng)),
            EcDSA::Es384 => Self::P384(p384::ecdsa::SigningKey::random(rng)),
            EcDSA::Es512 => Self::P521(p521::ecdsa::SigningKey::random(rng)),
        }
    }

    /// The algorithm this key signs with.
    pub const fn algorithm(&self) -> EcDSA {
        match self {
            Self::P256(_) => EcDSA::Es256,
            Self::P384(_) => EcDSA::Es384,
            Self::P521(_) => EcDSA::Es512,
        }
    }

    /// Returns the public half of this key.
    pub fn verifying_key(&self) -> VerifyingKey {
        match self {
            Self::P256(key) => VerifyingKey::P256(p256::ecdsa::VerifyingKey::from(key)),
            Self::P384(key) => VerifyingKey::P384(p384::ecdsa::VerifyingKey::from(key)),
            Self::P521(key) => VerifyingKey::P521(p521::ecdsa::VerifyingKey::from(key)),
        }
    }

    /// Signs `data` and returns the packed `r || s` signature.
    ///
    /// The random generator provides the additional input of the hedged
    /// nonce generation, so a generator that always yields the same bytes
    /// results in reproducible signatures.
    ///
    /// # Errors
    ///
    /// Returns the backend error if signing fails.
    pub fn sign(
        &self,
        rng: &mut impl CryptoRngCore,
        data: &[u8],
    ) -> Result<Vec<u8>, signature::Error> {
        let width = self.algorithm().coordinate_size();

        Ok(match self {
            Self::P256(key) => {
                let sig: p256::ecdsa::Signature = key.try_sign_with_rng(rng, data)?;
                let (r, s) = sig.split_bytes();
                pack(&r, &s, width)
            }
            Self::P384(key) => {
                let sig: p384::ecdsa::Signature = key.try_sign_with_rng(rng, data)?;
                let (r, s) = sig.split_bytes();
                pack(&r, &s, width)
            }
            Self::P521(key) => {
                let sig: p521::ecdsa::Signature = key.try_sign_with_rng(rng, data)?;
                let (r, s) = sig.split_bytes();
                pack(&r, &s, width)
            }
        })
    }
}

impl VerifyingKey {
    /// Creates a key from its SEC1 encoding (compressed or uncompressed).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKey`] if the bytes are not a point on the curve.
    pub fn from_sec1_bytes(alg: EcDSA, bytes: &[u8]) -> Result<Self, InvalidKey> {
        let invalid = InvalidKey(alg.curve_name());

        Ok(match alg {
            EcDSA::Es256 => Self::P256(
                p256::ecdsa::VerifyingKey::from_sec1_bytes(bytes).map_err(|_| invalid)?,
            ),
            EcDSA::Es384 => Self::P384(
                p384::ecdsa::VerifyingKey::from_sec1_bytes(bytes).map_err(|_| invalid)?,
            ),
            EcDSA::Es512 => Self::P521(
                p521::ecdsa::VerifyingKey::from_sec1_bytes(bytes).map_err(|_| invalid)?,
            ),
        })
    }

    /// The algorithm this key verifies.
    pub const fn algorithm(&self) -> EcDSA {
        match self {
            Self::P256(_) => EcDSA::Es256,
            Self::P384(_) => EcDSA::Es384,
            Self::P521(_) => EcDSA::Es512,
        }
    }

    /// Verifies a packed `r || s` signature over `msg`.
    ///
    /// Returns `Ok(false)` for a signature of the right size that does not
    /// match, including one whose halves are not valid scalars.
    ///
    /// # Errors
    ///
    /// Returns [`Malformed::SignatureLength`] if `signature` is not exactly
    /// twice the coordinate size of the curve.
    pub fn verify(&self, msg: &[u8], signature: &[u8]) -> Result<bool, Malformed> {
        check_size(signature, self.algorithm().coordinate_size())?;

        Ok(match self {
            Self::P256(key) => {
                let Ok(sig) = p256::ecdsa::Signature::from_slice(signature) else {
                    return Ok(false);
                };
                key.verify(msg, &sig).is_ok()
            }
            Self::P384(key) => {
                let Ok(sig) = p384::ecdsa::Signature::from_slice(signature) else {
                    return Ok(false);
                };
                key.verify(msg, &sig).is_ok()
            }
            Self::P521(key) => {
                let Ok(sig) = p521::ecdsa::Signature::from_slice(signature) else {
                    return Ok(false);
                };
                key.verify(msg, &sig).is_ok()
            }
        })
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(key: &SigningKey) -> Self {
        key.verifying_key()
    }
}

macro_rules! impl_from_curve_key {
    ($variant:ident, $curve:ident) => {
        impl From<$curve::ecdsa::SigningKey> for SigningKey {
            fn from(key: $curve::ecdsa::SigningKey) -> Self {
                Self::$variant(key)
            }
        }

        impl From<$curve::ecdsa::VerifyingKey> for VerifyingKey {
            fn from(key: $curve::ecdsa::VerifyingKey) -> Self {
                Self::$variant(key)
            }
        }
    };
}

impl_from_curve_key!(P256, p256);
impl_from_curve_key!(P384, p384);
impl_from_curve_key!(P521, p521);

/// Concatenates `r` and `s`, each left padded with zeros to `width` bytes.
///
/// Leading zero bytes beyond `width` are dropped.
pub(crate) fn pack(r: &[u8], s: &[u8], width: usize) -> Vec<u8> {
    let mut out = vec![0u8; 2 * width];
    let (r_out, s_out) = out.split_at_mut(width);
    left_pad(r_out, r);
    left_pad(s_out, s);
    out
}

fn left_pad(out: &mut [u8], bytes: &[u8]) {
    let bytes = &bytes[bytes.len().saturating_sub(out.len())..];
    let offset = out.len() - bytes.len();
    out[offset..].copy_from_slice(bytes);
}

/// Checks that a packed signature holds exactly two halves of `width` bytes.
pub(crate) fn check_size(signature: &[u8], width: usize) -> Result<(), Malformed> {
    if signature.len() != 2 * width {
        return Err(Malformed::SignatureLength {
            expected: 2 * width,
            actual: signature.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand_core::OsRng;

    use super::*;

    #[test]
    fn pack_pads_short_components() {
        let packed = pack(&[1, 2], &[3], 4);
        assert_eq!(packed, [0, 0, 1, 2, 0, 0, 0, 3]);

        let packed = pack(&[0, 0, 9, 9, 9], &[7, 7, 7, 7], 4);
        assert_eq!(packed, [0, 9, 9, 9, 7, 7, 7, 7]);
    }

    #[test]
    fn signature_size_is_exact() {
        let sig = [0u8; 64];
        assert_eq!(check_size(&sig, 32), Ok(()));

        assert_eq!(
            check_size(&sig[..63], 32),
            Err(Malformed::SignatureLength {
                expected: 64,
                actual: 63
            })
        );
    }

    #[test]
    fn sign_and_verify_every_curve() {
        for alg in [EcDSA::Es256, EcDSA::Es384, EcDSA::Es512] {
            let key = SigningKey::random(alg, &mut OsRng);
            let public = key.verifying_key();

            let sig = key.sign(&mut OsRng, b"message").unwrap();
            assert_eq!(sig.len(), alg.signature_size(), "{alg:?}");
            assert_eq!(public.verify(b"message", &sig), Ok(true));
            assert_eq!(public.verify(b"other", &sig), Ok(false));
        }
    }

    #[test]
    fn zero_scalars_do_not_verify() {
        for alg in [EcDSA::Es256, EcDSA::Es384, EcDSA::Es512] {
            let key = SigningKey::random(alg, &mut OsRng).verifying_key();
            let zeros = vec![0u8; alg.signature_size()];
            assert_eq!(key.verify(b"message", &zeros), Ok(false), "{alg:?}");
        }
    }
}
