/// P-Curves as defined in [section 6.2.1.1 of RFC 7518]
///
/// [section 6.2.1.1 of RFC 7518]: <https://datatracker.ietf.org/doc/html/rfc7518#section-6.2.1.1>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EllipticCurve {
    /// P-256 Curve
    P256,
    /// P-384 Curve
    P384,
    /// P-521 Curve
    P521,
}

impl EllipticCurve {
    /// The size of a single coordinate (`x` or `y`) in bytes, which is also
    /// the size of `r` and `s` in a signature.
    pub const fn coordinate_size(&self) -> usize {
        match self {
            Self::P256 => 32,
            Self::P384 => 48,
            Self::P521 => 66,
        }
    }
}

impl_serde_jwa!(
    EllipticCurve,
    crate::Error::UnsupportedCurve,
    [
        "P-256" => Self::P256; Self::P256,
        "P-384" => Self::P384; Self::P384,
        "P-521" => Self::P521; Self::P521,
    ]
);
