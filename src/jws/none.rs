use alloc::vec::Vec;

use crate::{error::SignError, jwa::JsonWebSigningAlgorithm, jws::Validator, Error};

/// The unsecured `none` algorithm.
///
/// Signing produces an empty signature and verification accepts every token,
/// whatever its signature field holds. Accepting tokens with this validator
/// means accepting tokens anyone could have written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoneValidator;

impl Validator for NoneValidator {
    fn algorithm(&self) -> JsonWebSigningAlgorithm {
        JsonWebSigningAlgorithm::None
    }

    fn sign(&mut self, _: &[u8]) -> Result<Vec<u8>, SignError> {
        Ok(Vec::new())
    }

    fn verify(&self, _: &[u8], _: &str) -> Result<bool, Error> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_anything() {
        assert!(NoneValidator.verify(b"", "").unwrap());
        assert!(NoneValidator.verify(b"a.b", "not even base64!").unwrap());
    }

    #[test]
    fn signs_empty() {
        assert!(NoneValidator.sign(b"a.b").unwrap().is_empty());
    }
}
