//! The table of algorithms this crate can sign and verify with.
//!
//! The registry maps an `alg` identifier to a constructor for its validator.
//! It is a fixed table, so adding an algorithm means adding an entry here.
//!
//! `none` is part of the table. Resolving the algorithm a token declares
//! therefore resolves unsecured tokens too, see
//! [`NoneValidator`](crate::jws::NoneValidator).

use alloc::boxed::Box;

use crate::{
    jwa::JsonWebSigningAlgorithm,
    jws::{EcdsaValidator, HmacValidator, NoneValidator, RsaValidator, Validator},
    Error, KeySet,
};

type Constructor = fn(&JsonWebSigningAlgorithm, &KeySet) -> Result<Box<dyn Validator>, Error>;

static ALGORITHMS: &[(&str, Constructor)] = &[
    ("none", none),
    ("HS256", hmac),
    ("HS384", hmac),
    ("HS512", hmac),
    ("RS256", rsa),
    ("RS384", rsa),
    ("RS512", rsa),
    ("ES256", ecdsa),
    ("ES384", ecdsa),
    ("ES512", ecdsa),
];

/// The identifiers of every registered algorithm.
pub fn algorithms() -> impl Iterator<Item = &'static str> {
    ALGORITHMS.iter().map(|(id, _)| *id)
}

/// Builds the validator for `alg`, taking its key material from `keys`.
///
/// Missing keys are not an error here; the validator then fails to sign and
/// rejects signatures.
///
/// # Errors
///
/// Returns [`Error::AlgorithmNotImplemented`] if `alg` is not registered.
pub fn resolve(alg: &JsonWebSigningAlgorithm, keys: &KeySet) -> Result<Box<dyn Validator>, Error> {
    let name = alg.as_str();

    let Some((_, constructor)) = ALGORITHMS.iter().find(|(id, _)| *id == name) else {
        event!(debug, alg = name, "algorithm not implemented");
        return Err(Error::AlgorithmNotImplemented(name.into()));
    };

    event!(trace, alg = name, "resolved validator");
    constructor(alg, keys)
}

/// Like [`resolve`], for an identifier that was not parsed yet.
///
/// Identifiers are case sensitive.
///
/// # Errors
///
/// Returns [`Error::AlgorithmNotImplemented`] if `identifier` is not
/// registered.
pub fn resolve_str(identifier: &str, keys: &KeySet) -> Result<Box<dyn Validator>, Error> {
    let Ok(alg) = identifier.parse::<JsonWebSigningAlgorithm>();
    resolve(&alg, keys)
}

fn none(_: &JsonWebSigningAlgorithm, _: &KeySet) -> Result<Box<dyn Validator>, Error> {
    Ok(Box::new(NoneValidator))
}

fn hmac(alg: &JsonWebSigningAlgorithm, keys: &KeySet) -> Result<Box<dyn Validator>, Error> {
    let mut validator = HmacValidator::for_algorithm(alg)?;
    if let Some(secret) = keys.hmac_secret() {
        validator = validator.with_secret(secret);
    }

    Ok(Box::new(validator))
}

fn rsa(alg: &JsonWebSigningAlgorithm, keys: &KeySet) -> Result<Box<dyn Validator>, Error> {
    let mut validator = RsaValidator::for_algorithm(alg)?;
    if let Some(key) = keys.rsa_private_key() {
        validator = validator.with_private_key(key.clone());
    }
    if let Some(key) = keys.rsa_public_key() {
        validator = validator.with_public_key(key.clone());
    }

    Ok(Box::new(validator))
}

fn ecdsa(alg: &JsonWebSigningAlgorithm, keys: &KeySet) -> Result<Box<dyn Validator>, Error> {
    let mut validator = EcdsaValidator::for_algorithm(alg)?;
    let variant = validator.variant();

    if let Some(key) = keys.ec_signing_key(variant) {
        validator = validator.with_signing_key(key.clone());
    }
    if let Some(key) = keys.ec_verifying_key(variant) {
        validator = validator.with_verifying_key(key.clone());
    }

    Ok(Box::new(validator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_resolves_to_itself() {
        let keys = KeySet::new();
        for id in algorithms() {
            let validator = resolve_str(id, &keys).unwrap();
            assert_eq!(validator.algorithm().as_str(), id);
        }
        assert_eq!(algorithms().count(), 10);
    }

    #[test]
    fn unknown_identifiers() {
        let keys = KeySet::new();
        for id in ["unknown", "PS256", "EdDSA", "hs256", "NONE", ""] {
            match resolve_str(id, &keys) {
                Err(Error::AlgorithmNotImplemented(name)) => assert_eq!(name, id),
                Err(other) => panic!("{id}: {other:?}"),
                Ok(_) => panic!("{id} resolved"),
            }
        }
    }

    #[test]
    fn keys_are_handed_over() {
        let keys = KeySet::new().with_hmac_secret(b"bogokey".to_vec());
        let mut validator = resolve_str("HS256", &keys).unwrap();
        assert!(validator.sign(b"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.e30").is_ok());

        let mut validator = resolve_str("HS256", &KeySet::new()).unwrap();
        assert!(validator.sign(b"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.e30").is_err());
    }
}
