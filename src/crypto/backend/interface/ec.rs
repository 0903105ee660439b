//! The interfaces for EC keys.

use crate::{
    crypto::Result,
    jwa::{EllipticCurve, HashAlgorithm},
};

/// The common operations for a curve-generic EC public key.
pub(crate) trait PublicKey: Sized {
    /// Creates a new public key from the given affine coordinates.
    ///
    /// Fails if the coordinates do not have the size of the curve or the
    /// point is not on the curve.
    fn new(curve: EllipticCurve, x: &[u8], y: &[u8]) -> Result<Self>;

    /// Verifies if the message, hashed using `hash`, is valid for the given
    /// `r || s` signature.
    ///
    /// Returns `true` if the signature is valid, `false` otherwise.
    fn verify(&mut self, hash: HashAlgorithm, msg: &[u8], signature: &[u8]) -> Result<bool>;
}
