//! Cryptographic primitives.
//!
//! This module abstracts away the different cryptographic libraries behind the
//! [`CryptoProvider`] trait. The library used by [`DefaultProvider`] is
//! selected at compile time using the `crypto-*` feature flags, so the code
//! that uses it never changes.

pub(crate) mod backend;

use alloc::vec::Vec;
use core::{error, fmt};

use backend::interface::{self, ec::PublicKey as _, rsa::PublicKey as _};

use self::backend::Backend;
use crate::jwa::{EllipticCurve, HashAlgorithm};

type BackendRsaPublicKey = <Backend as interface::Backend>::RsaPublicKey;
type BackendEcPublicKey = <Backend as interface::Backend>::EcPublicKey;

/// The result type used for cryptographic operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The erased error type that is used to generalize all errors that all the
/// cryptographic libraries can return.
pub struct Error {
    inner: <Backend as interface::Backend>::Error,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        error::Error::source(&self.inner)
    }
}

impl<E> From<E> for Error
where
    <Backend as interface::Backend>::Error: From<E>,
{
    fn from(err: E) -> Self {
        Self {
            inner: <Backend as interface::Backend>::Error::from(err),
        }
    }
}

/// The asymmetric primitives the JWK adapters delegate to.
///
/// All numbers and coordinates are unsigned big endian integers, exactly as
/// they appear after base64url decoding a JWK member.
pub trait CryptoProvider {
    /// Encrypts `plaintext` with the RSA public key `(modulus, exponent)`
    /// using OAEP, where `hash` is used for the label digest and MGF1.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the key is rejected by the backend or the
    /// plaintext is too long for the modulus.
    fn rsa_encrypt_oaep(
        &self,
        modulus: &[u8],
        exponent: &[u8],
        plaintext: &[u8],
        hash: HashAlgorithm,
    ) -> Result<Vec<u8>>;

    /// Verifies the fixed size `r || s` ECDSA `signature` of `message`, which
    /// is hashed using `hash`, against the public point `(x, y)` on `curve`.
    ///
    /// Returns `true` if the signature is valid, `false` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the point is not on the curve or the backend
    /// fails.
    fn ecdsa_verify(
        &self,
        curve: EllipticCurve,
        x: &[u8],
        y: &[u8],
        message: &[u8],
        signature: &[u8],
        hash: HashAlgorithm,
    ) -> Result<bool>;
}

/// The [`CryptoProvider`] backed by the library selected at compile time.
///
/// Key handles only live for the duration of a single call.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultProvider;

impl CryptoProvider for DefaultProvider {
    fn rsa_encrypt_oaep(
        &self,
        modulus: &[u8],
        exponent: &[u8],
        plaintext: &[u8],
        hash: HashAlgorithm,
    ) -> Result<Vec<u8>> {
        let mut key = BackendRsaPublicKey::from_components(interface::rsa::PublicKeyComponents {
            n: modulus,
            e: exponent,
        })?;

        key.encrypt(hash, plaintext)
    }

    fn ecdsa_verify(
        &self,
        curve: EllipticCurve,
        x: &[u8],
        y: &[u8],
        message: &[u8],
        signature: &[u8],
        hash: HashAlgorithm,
    ) -> Result<bool> {
        let mut key = BackendEcPublicKey::new(curve, x, y)?;

        // the signature must be `r` and `s` of exactly one coordinate size each
        if signature.len() != 2 * curve.coordinate_size() {
            return Ok(false);
        }

        key.verify(hash, message, signature)
    }
}
