//! This backend implements the primitives using the [OpenSSL](openssl) library.

use openssl::hash::MessageDigest;
use thiserror::Error;

use super::interface;
use crate::jwa::HashAlgorithm;

pub(crate) mod ec;
pub(crate) mod rsa;

#[derive(Debug, Error)]
pub(crate) enum BackendError {
    /// An error from the OpenSSL library.
    #[error(transparent)]
    OpenSsl(#[from] openssl::error::ErrorStack),

    /// A coordinate does not have the size of the curve.
    #[error("expected a coordinate of {expected} bytes, got {actual} bytes")]
    InvalidEcPoint { expected: usize, actual: usize },
}

/// The [OpenSSL](openssl) based backend.
#[derive(Debug)]
pub(crate) enum Backend {}

impl interface::Backend for Backend {
    type EcPublicKey = ec::PublicKey;
    type Error = BackendError;
    type RsaPublicKey = rsa::PublicKey;
}

fn message_digest(hash: HashAlgorithm) -> MessageDigest {
    match hash {
        HashAlgorithm::Sha1 => MessageDigest::sha1(),
        HashAlgorithm::Sha256 => MessageDigest::sha256(),
        HashAlgorithm::Sha384 => MessageDigest::sha384(),
        HashAlgorithm::Sha512 => MessageDigest::sha512(),
    }
}
