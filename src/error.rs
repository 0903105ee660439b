use alloc::string::String;

use thiserror::Error;

use crate::{base64_url::DecodeError, crypto};

/// The result type used by fallible operations of this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors that may occur while using a JWK for encryption.
///
/// Verification never returns these, see
/// [`VerificationKey::verify`](crate::jwk::VerificationKey::verify).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A base64url encoded member of the key could not be decoded.
    #[error(transparent)]
    Format(#[from] DecodeError),
    /// The `alg` member names an algorithm that is not supported for this
    /// operation. An absent `alg` is reported as an empty name.
    #[error("unsupported algorithm: `{0}`")]
    UnsupportedAlgorithm(String),
    /// The `crv` member names a curve that is not supported.
    #[error("unsupported curve: `{0}`")]
    UnsupportedCurve(String),
    /// The cryptographic backend rejected the key or the operation.
    #[error(transparent)]
    Crypto(#[from] crypto::Error),
}
