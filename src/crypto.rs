//! Cryptographic primitives.
//!
//! Thin wrappers over the [RustCrypto] crates, one module per algorithm
//! family. Each wrapper erases the generic digest or curve parameter of the
//! underlying crate so it can be selected at runtime from a
//! [`JsonWebSigningAlgorithm`](crate::jwa::JsonWebSigningAlgorithm).
//!
//! [RustCrypto]: https://github.com/RustCrypto

pub mod ec;
pub mod hmac;
pub mod rsa;

use alloc::vec::Vec;

use sha2::Digest as _;

use crate::jwa::RsassaPkcs1V1_5;

/// Performs a quick Sha256 of the given data.
#[inline]
pub(crate) fn sha256(data: &[u8]) -> Vec<u8> {
    sha2::Sha256::digest(data).to_vec()
}

/// Performs a quick Sha384 of the given data.
#[inline]
pub(crate) fn sha384(data: &[u8]) -> Vec<u8> {
    sha2::Sha384::digest(data).to_vec()
}

/// Performs a quick Sha512 of the given data.
#[inline]
pub(crate) fn sha512(data: &[u8]) -> Vec<u8> {
    sha2::Sha512::digest(data).to_vec()
}

/// Hashes `data` with the digest the RSA variant is defined over.
pub(crate) fn digest_for(alg: RsassaPkcs1V1_5, data: &[u8]) -> Vec<u8> {
    match alg {
        RsassaPkcs1V1_5::Rs256 => sha256(data),
        RsassaPkcs1V1_5::Rs384 => sha384(data),
        RsassaPkcs1V1_5::Rs512 => sha512(data),
    }
}
