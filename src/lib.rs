//! JSON Web Signature (JWS) tokens in the compact serialization defined by
//! [RFC 7515].
//!
//! A token is three base64url fields joined by `.`: the JSON header, the JSON
//! payload and the signature over `header "." payload`. This crate builds,
//! signs, parses and verifies such tokens for the `none`, `HS*`, `RS*` and
//! `ES*` algorithm families.
//!
//! ```
//! # use compact_jws::{Claims, Decoder, Encoder, KeySet};
//! # fn main() -> Result<(), compact_jws::Error> {
//! let keys = KeySet::new().with_hmac_secret(b"bogokey".to_vec());
//!
//! let claims = Claims::empty().with_subject("1234567890");
//! let token = Encoder::for_algorithm("HS256", &keys)?.encode(&claims)?;
//! assert!(token.starts_with("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9."));
//!
//! let decoded: Claims = Decoder::new(keys).decode(&token)?;
//! assert_eq!(decoded.subject.as_deref(), Some("1234567890"));
//! # Ok(())
//! # }
//! ```
//!
//! # Algorithm selection
//!
//! Decoding dispatches on the `alg` value the token itself declares. A caller
//! that expects a single algorithm family must check
//! [`Token::header`] (or use [`Token::validate_with`] with a validator of its
//! choice) to pin it. This includes `none`: a [`Decoder`] accepts unsecured
//! tokens.
//!
//! [RFC 7515]: <https://datatracker.ietf.org/doc/html/rfc7515>
#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    explicit_outlives_requirements,
    clippy::missing_errors_doc
)]
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    macro_use_extern_crate,
    non_ascii_idents,
    elided_lifetimes_in_paths
)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

pub mod base64_url;
mod claims;
mod codec;
pub mod crypto;
mod error;
pub mod format;
mod header;
pub mod jwa;
pub mod jws;
mod keys;
pub mod registry;
mod token;
mod verify;

#[doc(inline)]
pub use self::{
    base64_url::Base64UrlString,
    claims::Claims,
    codec::{Decoder, Encoder},
    error::{Error, Malformed, SignError},
    header::Header,
    jwa::JsonWebSigningAlgorithm,
    jws::Validator,
    keys::KeySet,
    token::{encode_fields, Token},
    verify::Verified,
};
