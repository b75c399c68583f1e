//! The primitives for working with [HMAC] algorithms.
//!
//! [HMAC]: https://en.wikipedia.org/wiki/HMAC

use alloc::vec::Vec;
use core::fmt;

use ::hmac::Hmac;
use digest::{KeyInit, Mac as _};
use subtle::ConstantTimeEq as _;

use crate::jwa;

/// Rust crypto uses generic arguments to represent the variant.
///
/// We don't to that at this level, so we have to erase the type.
#[derive(Clone)]
enum ErasedKey {
    Hs256(Hmac<sha2::Sha256>),
    Hs384(Hmac<sha2::Sha384>),
    Hs512(Hmac<sha2::Sha512>),
}

/// A keyed HMAC instance for one of the SHA-2 variants.
///
/// The key is absorbed into the MAC state on construction; signing clones
/// that state, so a `Key` can be shared between threads and reused.
#[derive(Clone)]
pub struct Key {
    inner: ErasedKey,
    variant: jwa::Hmac,
}

impl Key {
    /// Creates a new key from the given secret.
    ///
    /// HMAC accepts secrets of any length, including keys shorter than the
    /// digest output that [RFC 7518] would reject.
    ///
    /// [RFC 7518]: <https://datatracker.ietf.org/doc/html/rfc7518#section-3.2>
    pub fn new(variant: jwa::Hmac, secret: &[u8]) -> Self {
        // `new_from_slice` never fails for HMAC, long keys are hashed first
        let inner = match variant {
            jwa::Hmac::Hs256 => ErasedKey::Hs256(keyed(secret)),
            jwa::Hmac::Hs384 => ErasedKey::Hs384(keyed(secret)),
            jwa::Hmac::Hs512 => ErasedKey::Hs512(keyed(secret)),
        };

        Self { inner, variant }
    }

    /// The variant this key was created for.
    pub const fn variant(&self) -> jwa::Hmac {
        self.variant
    }

    /// Computes the MAC of `data`.
    pub fn sign(&self, data: &[u8]) -> Vec<u8> {
        match self.inner.clone() {
            ErasedKey::Hs256(mut mac) => {
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }
            ErasedKey::Hs384(mut mac) => {
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }
            ErasedKey::Hs512(mut mac) => {
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }
        }
    }

    /// Checks `signature` against the MAC of `data` in constant time.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        let expected = self.sign(data);
        bool::from(signature.ct_eq(&expected))
    }
}

fn keyed<M: KeyInit>(secret: &[u8]) -> M {
    match M::new_from_slice(secret) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC accepts keys of any length"),
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("algorithm", &self.variant)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base64_url;

    const INPUT: &[u8] = b"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

    #[test]
    fn known_hs256_mac() {
        let key = Key::new(jwa::Hmac::Hs256, b"bogokey");
        let mac = key.sign(INPUT);
        assert_eq!(
            base64_url::encode(&mac),
            "Ayw1D-27S5W4XfiP-nFRm_BxSpN-v_cqlWUiwszjAB8"
        );
        assert!(key.verify(INPUT, &mac));
    }

    #[test]
    fn output_sizes() {
        for variant in [jwa::Hmac::Hs256, jwa::Hmac::Hs384, jwa::Hmac::Hs512] {
            let key = Key::new(variant, b"bogokey");
            assert_eq!(key.sign(INPUT).len(), variant.output_size());
        }
    }

    #[test]
    fn verify_rejects_other_keys_and_lengths() {
        let key = Key::new(jwa::Hmac::Hs256, b"bogokey");
        let other = Key::new(jwa::Hmac::Hs256, b"definitely the wrong key");
        let mac = key.sign(INPUT);

        assert!(!other.verify(INPUT, &mac));
        assert!(!key.verify(INPUT, &mac[..16]));
        assert!(!key.verify(INPUT, &[]));
    }
}
