//! This backend implements the primitives using the [RustCrypto] ecosystem.
//!
//! [RustCrypto]: https://github.com/RustCrypto

use thiserror::Error;

use super::interface;

pub(crate) mod ec;
pub(crate) mod rsa;

/// The errors that can be produced by the rust crypto backend.
#[derive(Debug, Error)]
pub(crate) enum BackendError {
    /// RSA operation failed.
    #[cfg_attr(feature = "std", error("an RSA operation failed"))]
    #[cfg_attr(not(feature = "std"), error("an RSA operation failed: {0}"))]
    Rsa(#[cfg_attr(feature = "std", source)] ::rsa::errors::Error),

    /// A coordinate does not have the size of the curve.
    #[error("expected a coordinate of {expected} bytes, got {actual} bytes")]
    InvalidEcPoint { expected: usize, actual: usize },

    /// The point is not on the curve.
    #[error("the public point is not on the curve")]
    InvalidEcKey,
}

impl From<::rsa::errors::Error> for BackendError {
    fn from(x: ::rsa::errors::Error) -> Self {
        Self::Rsa(x)
    }
}

/// The [RustCrypto] based backend.
///
/// [RustCrypto]: https://github.com/RustCrypto
#[derive(Debug)]
pub(crate) enum Backend {}

impl interface::Backend for Backend {
    type EcPublicKey = ec::PublicKey;
    type Error = BackendError;
    type RsaPublicKey = rsa::PublicKey;
}
