//! Common traits that define the API each backend must implement.

use core::{error, fmt};

pub(crate) mod ec;
pub(crate) mod rsa;

/// The backend trait that all backends must implement.
///
/// Only public key operations are required, private keys never reach this
/// crate.
pub(crate) trait Backend {
    /// The error type that is used by this backend.
    type Error: fmt::Debug + fmt::Display + error::Error + 'static;

    /// The RSA public key type.
    type RsaPublicKey: rsa::PublicKey;

    /// The EC public key type.
    type EcPublicKey: ec::PublicKey;
}
