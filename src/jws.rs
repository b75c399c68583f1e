//! The signing algorithms a token can be secured with.
//!
//! Every algorithm family implements [`Validator`]. A validator holds the key
//! material for exactly one algorithm and no state of the tokens it processes,
//! so a single instance can sign and verify any number of tokens.
//!
//! Validators are usually obtained from the [registry](crate::registry), but
//! the concrete types can be built directly to pin an algorithm:
//!
//! ```
//! # use compact_jws::{jws::HmacValidator, jwa::Hmac, Claims, Token};
//! # fn main() -> Result<(), compact_jws::Error> {
//! let mut hs256 = HmacValidator::new(Hmac::Hs256).with_secret(b"bogokey");
//!
//! let mut token = Token::new(Claims::empty().with_subject("1234567890"));
//! token.sign_with(&mut hs256)?;
//!
//! let parsed = Token::<Claims>::parse(&token.compact()?.to_string())?;
//! assert!(parsed.validate_with(&hs256)?);
//! # Ok(())
//! # }
//! ```

mod ecdsa;
mod hmac;
mod none;
mod rsa;

use alloc::{boxed::Box, vec::Vec};

#[doc(inline)]
pub use self::{
    ecdsa::EcdsaValidator, hmac::HmacValidator, none::NoneValidator, rsa::RsaValidator,
};
use crate::{error::SignError, jwa::JsonWebSigningAlgorithm, Error};

/// The sign and verify operations of one signing algorithm.
///
/// The signing input is always `header "." payload` as it appears in the
/// compact form, never a re-serialization of the parsed JSON.
pub trait Validator {
    /// The algorithm written into the `alg` header parameter of every token
    /// signed by this validator.
    fn algorithm(&self) -> JsonWebSigningAlgorithm;

    /// Signs `msg` and returns the raw signature bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the key material needed for signing is missing or
    /// the cryptographic backend fails.
    fn sign(&mut self, msg: &[u8]) -> Result<Vec<u8>, SignError>;

    /// Checks the still encoded signature field against `msg`.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedToken`] if the signature field cannot be
    /// decoded for this algorithm, and [`Error::BadSignature`] if the key
    /// needed for verification is missing.
    fn verify(&self, msg: &[u8], signature: &str) -> Result<bool, Error>;
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn algorithm(&self) -> JsonWebSigningAlgorithm {
        (**self).algorithm()
    }

    fn sign(&mut self, msg: &[u8]) -> Result<Vec<u8>, SignError> {
        (**self).sign(msg)
    }

    fn verify(&self, msg: &[u8], signature: &str) -> Result<bool, Error> {
        (**self).verify(msg, signature)
    }
}

/// The error for constructing a validator of one family with an identifier
/// of another.
fn not_implemented(alg: &JsonWebSigningAlgorithm) -> Error {
    Error::AlgorithmNotImplemented(alg.as_str().into())
}
