//! Signing algorithm identifiers of JSON Web Algorithms (JWA) as defined in
//! [RFC 7518]
//!
//! [RFC 7518]: <https://datatracker.ietf.org/doc/html/rfc7518>

mod ecdsa;
mod hmac;
mod rsassa_pkcs1_v1_5;

use alloc::string::String;

#[doc(inline)]
pub use self::{ecdsa::EcDSA, hmac::Hmac, rsassa_pkcs1_v1_5::RsassaPkcs1V1_5};

/// A JSON Web Algorithm (JWA) for signing operations (JWS) as defined in
/// [RFC 7518 section 3]
///
/// This enum covers the `alg` header parameter values this crate knows. Any
/// other value is kept in [`Other`](Self::Other), so a token that declares an
/// unknown algorithm still parses and is rejected when a validator is
/// resolved for it.
///
/// [RFC 7518 section 3]: <https://datatracker.ietf.org/doc/html/rfc7518#section-3>
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum JsonWebSigningAlgorithm {
    /// HMAC with SHA-2 Functions
    Hmac(Hmac),
    /// RSASSA-PKCS1-v1_5 using SHA-2 Functions
    Rsa(RsassaPkcs1V1_5),
    /// Digital Signature with ECDSA
    EcDSA(EcDSA),
    /// The "none" algorithm as defined in [section 3.6 of RFC 7518].
    ///
    /// Using this algorithm essentially means that there is
    /// no integrity protection for the JWS.
    ///
    /// [section 3.6 of RFC 7518]: <https://datatracker.ietf.org/doc/html/rfc7518#section-3.6>
    None,
    /// An identifier that is not recognised by this implementation.
    Other(String),
}

impl_serde_jwa!(
    JsonWebSigningAlgorithm,
    [
        "HS256" => Self::Hmac(Hmac::Hs256); Self::Hmac(Hmac::Hs256),
        "HS384" => Self::Hmac(Hmac::Hs384); Self::Hmac(Hmac::Hs384),
        "HS512" => Self::Hmac(Hmac::Hs512); Self::Hmac(Hmac::Hs512),

        "RS256" => Self::Rsa(RsassaPkcs1V1_5::Rs256); Self::Rsa(RsassaPkcs1V1_5::Rs256),
        "RS384" => Self::Rsa(RsassaPkcs1V1_5::Rs384); Self::Rsa(RsassaPkcs1V1_5::Rs384),
        "RS512" => Self::Rsa(RsassaPkcs1V1_5::Rs512); Self::Rsa(RsassaPkcs1V1_5::Rs512),

        "ES256" => Self::EcDSA(EcDSA::Es256); Self::EcDSA(EcDSA::Es256),
        "ES384" => Self::EcDSA(EcDSA::Es384); Self::EcDSA(EcDSA::Es384),
        "ES512" => Self::EcDSA(EcDSA::Es512); Self::EcDSA(EcDSA::Es512),

        "none" => Self::None; Self::None,
    ]
);

impl From<Hmac> for JsonWebSigningAlgorithm {
    fn from(x: Hmac) -> Self {
        Self::Hmac(x)
    }
}

impl From<RsassaPkcs1V1_5> for JsonWebSigningAlgorithm {
    fn from(x: RsassaPkcs1V1_5) -> Self {
        Self::Rsa(x)
    }
}

impl From<EcDSA> for JsonWebSigningAlgorithm {
    fn from(x: EcDSA) -> Self {
        Self::EcDSA(x)
    }
}
