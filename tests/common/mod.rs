//! Common test helpers.
#![allow(dead_code)]

use compact_jws::{
    base64_url,
    crypto::rsa::{RsaPrivateKey, RsaPublicKey},
    KeySet,
};
use rsa::{pkcs1::DecodeRsaPrivateKey, pkcs8::DecodePublicKey};

pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// The secret the known HMAC tokens are signed with.
pub const HMAC_SECRET: &[u8] = b"bogokey";

/// `{"sub":"1234567890"}`
pub const SUB_PAYLOAD: &str = "eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// Reads a file from the `tests/data` directory.
pub fn read_data(name: &str) -> TestResult<String> {
    let data = std::fs::read_to_string(format!(
        "{}/tests/data/{name}",
        env!("CARGO_MANIFEST_DIR"),
    ))?;

    Ok(data)
}

/// The private half of the 2048 bit fixture keypair.
pub fn rsa_private_key() -> TestResult<RsaPrivateKey> {
    Ok(RsaPrivateKey::from_pkcs1_pem(&read_data("rsa_private.pem")?)?)
}

/// The public half of the 2048 bit fixture keypair.
pub fn rsa_public_key() -> TestResult<RsaPublicKey> {
    Ok(RsaPublicKey::from_public_key_pem(&read_data("rsa_public.pem")?)?)
}

/// A key set holding the HMAC secret and the RSA fixture keys.
pub fn keys() -> TestResult<KeySet> {
    Ok(KeySet::new()
        .with_hmac_secret(HMAC_SECRET)
        .with_rsa_private_key(rsa_private_key()?)
        .with_rsa_public_key(rsa_public_key()?))
}

/// Flips the lowest bit of the signature byte at `index` (wrapping around the
/// signature length) and returns the token with the re-encoded signature.
pub fn flip_signature_bit(token: &str, index: usize) -> String {
    let (input, signature) = token.rsplit_once('.').expect("three fields");
    let mut signature = base64_url::decode(signature).expect("valid signature");
    let len = signature.len();
    signature[index % len] ^= 1;

    format!("{input}.{}", base64_url::encode(signature))
}
