use alloc::{
    boxed::Box,
    string::{String, ToString},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::{jws::Validator, registry, Error, KeySet, Token, Verified};

/// Turns claims into signed compact tokens with one fixed validator.
///
/// ```
/// # use compact_jws::{jws::NoneValidator, Encoder};
/// # use serde_json::json;
/// # fn main() -> Result<(), compact_jws::Error> {
/// let token = Encoder::new(NoneValidator).encode(&json!({}))?;
/// assert_eq!(token, "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.e30.");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Encoder<V> {
    validator: V,
}

impl Encoder<Box<dyn Validator>> {
    /// Creates an encoder for the registered algorithm `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlgorithmNotImplemented`] if the identifier is not
    /// registered.
    pub fn for_algorithm(identifier: &str, keys: &KeySet) -> Result<Self, Error> {
        Ok(Self::new(registry::resolve_str(identifier, keys)?))
    }
}

impl<V: Validator> Encoder<V> {
    /// Creates an encoder signing with `validator`.
    pub const fn new(validator: V) -> Self {
        Self { validator }
    }

    /// The validator tokens are signed with.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Signs `claims` and returns the compact form of the token.
    ///
    /// The header is `{"alg":<algorithm>,"typ":"JWT"}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sign`] if the claims do not serialize or the
    /// validator cannot sign.
    pub fn encode<P: Serialize + ?Sized>(&mut self, claims: &P) -> Result<String, Error> {
        event!(debug, alg = %self.validator.algorithm(), "encode");

        let mut token = Token::new(claims);
        token.sign_with(&mut self.validator).map_err(rejected)?;
        Ok(token.compact()?.to_string())
    }
}

/// Parses and verifies compact tokens.
///
/// The validator is chosen by the `alg` the token declares, with key
/// material from the [`KeySet`]. Any registered algorithm is accepted,
/// including `none`. Callers expecting one algorithm must check
/// [`Token::header`] on the result of [`decode_token`](Self::decode_token),
/// or verify with a validator of their choice through
/// [`Token::verify`].
#[derive(Debug, Default)]
pub struct Decoder {
    keys: KeySet,
}

impl Decoder {
    /// Creates a decoder verifying with the given keys.
    pub const fn new(keys: KeySet) -> Self {
        Self { keys }
    }

    /// Decodes and verifies `input`, returning its payload.
    ///
    /// # Errors
    ///
    /// See [`decode_token`](Self::decode_token).
    pub fn decode<P: DeserializeOwned>(&self, input: &str) -> Result<P, Error> {
        Ok(self.decode_token(input)?.into_inner().into_payload())
    }

    /// Decodes and verifies `input`, returning the whole token.
    ///
    /// Surrounding ASCII whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedToken`] for input that is not a well-formed
    /// token, [`Error::AlgorithmNotImplemented`] if the declared algorithm
    /// is not registered, and [`Error::BadSignature`] if the signature does
    /// not match or the key to check it is missing.
    pub fn decode_token<P: DeserializeOwned>(
        &self,
        input: &str,
    ) -> Result<Verified<Token<P>>, Error> {
        event!(debug, "decode");

        let input = input.trim_matches(|c: char| c.is_ascii_whitespace());
        let token = Token::<P>::parse(input).map_err(rejected)?;
        let validator =
            registry::resolve(&token.header().algorithm, &self.keys).map_err(rejected)?;

        token.verify(&*validator).map_err(rejected)
    }
}

fn rejected(err: Error) -> Error {
    event!(debug, error = %err, "token rejected");
    err
}
