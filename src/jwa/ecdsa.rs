/// Digital Signature with ECDSA as defined in [section 3.4 of RFC 7518]
///
/// [section 3.4 of RFC 7518]: <https://datatracker.ietf.org/doc/html/rfc7518#section-3.4>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcDSA {
    /// ECDSA using P-256 and SHA-256
    Es256,
    /// ECDSA using P-384 and SHA-384
    Es384,
    /// ECDSA using P-521 and SHA-512
    Es512,
}

impl EcDSA {
    /// The name of the curve, as used in the `crv` parameter of a JWK.
    pub const fn curve_name(self) -> &'static str {
        match self {
            Self::Es256 => "P-256",
            Self::Es384 => "P-384",
            Self::Es512 => "P-521",
        }
    }

    /// The size of one coordinate (and of each of `r` and `s`) in bytes.
    pub const fn coordinate_size(self) -> usize {
        match self {
            Self::Es256 => 32,
            Self::Es384 => 48,
            Self::Es512 => 66,
        }
    }

    /// The size of a `r || s` signature in bytes.
    pub const fn signature_size(self) -> usize {
        2 * self.coordinate_size()
    }
}
