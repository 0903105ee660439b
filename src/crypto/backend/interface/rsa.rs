//! The interfaces for RSA.

use alloc::vec::Vec;

use crate::{crypto::Result, jwa::HashAlgorithm};

/// The components of a public key.
///
/// Both fields are big integers represented in big endian bytes.
pub(crate) struct PublicKeyComponents<'a> {
    pub n: &'a [u8],
    pub e: &'a [u8],
}

/// The common operations for an RSA public key.
pub(crate) trait PublicKey: Sized {
    /// Creates a new RSA public key from the given public key components.
    fn from_components(components: PublicKeyComponents<'_>) -> Result<Self>;

    /// Encrypts the given data using RSAES-OAEP, with `hash` used for both
    /// the label digest and MGF1.
    ///
    /// This operation **must** be re-usable, meaning this method can be
    /// called multiple times with different data to encrypt.
    fn encrypt(&mut self, hash: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>>;
}
