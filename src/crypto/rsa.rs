//! The primitives for working with [RSA] signatures (RSASSA-PKCS1-v1_5).
//!
//! Keys are the [`rsa`](::rsa) crate's own types. Loading them from PEM or
//! DER is left to the caller.
//!
//! [RSA]: https://en.wikipedia.org/wiki/RSA_cryptosystem

use alloc::vec::Vec;

#[doc(no_inline)]
pub use ::rsa::{RsaPrivateKey, RsaPublicKey};
use ::rsa::Pkcs1v15Sign;

use crate::{crypto::digest_for, jwa::RsassaPkcs1V1_5};

fn padding(alg: RsassaPkcs1V1_5) -> Pkcs1v15Sign {
    match alg {
        RsassaPkcs1V1_5::Rs256 => Pkcs1v15Sign::new::<sha2::Sha256>(),
        RsassaPkcs1V1_5::Rs384 => Pkcs1v15Sign::new::<sha2::Sha384>(),
        RsassaPkcs1V1_5::Rs512 => Pkcs1v15Sign::new::<sha2::Sha512>(),
    }
}

/// Hashes `data` and signs the digest with `key`.
///
/// PKCS#1 v1.5 signatures are deterministic; the random generator is only
/// used for blinding the private key operation.
///
/// # Errors
///
/// Returns the backend error if the key cannot produce a signature.
pub fn sign(
    key: &RsaPrivateKey,
    alg: RsassaPkcs1V1_5,
    data: &[u8],
) -> Result<Vec<u8>, ::rsa::Error> {
    let hashed = digest_for(alg, data);
    key.sign_with_rng(&mut rand_core::OsRng, padding(alg), &hashed)
}

/// Hashes `msg` and checks `signature` over the digest with `key`.
pub fn verify(key: &RsaPublicKey, alg: RsassaPkcs1V1_5, msg: &[u8], signature: &[u8]) -> bool {
    let hashed = digest_for(alg, msg);
    key.verify(padding(alg), &hashed, signature).is_ok()
}
