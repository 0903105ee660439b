//! JSON Web Keys as defined in [RFC 7517], narrowed to the two public key
//! shapes this crate can use.
//!
//! * [`EncryptionKey`], an `RSA` key used for RSAES-OAEP encryption
//! * [`VerificationKey`], an `EC` key used for ECDSA signature verification
//!
//! Both can be deserialized from a JWK document or assembled with a builder.
//!
//! [RFC 7517]: <https://datatracker.ietf.org/doc/html/rfc7517>

mod encryption;
mod key_ops;
mod key_type;
mod verification;

use hashbrown::HashSet;

#[doc(inline)]
pub use self::{
    encryption::{EncryptionKey, EncryptionKeyBuilder},
    key_ops::KeyOperation,
    key_type::KeyType,
    verification::{VerificationKey, VerificationKeyBuilder, VerifyError},
};

/// The `key_ops` member of a JWK.
pub type KeyOperations = HashSet<KeyOperation>;

/// Returns `true` if the optional `key_ops` contain `op`.
///
/// An absent `key_ops` member permits nothing.
fn permits(key_ops: Option<&KeyOperations>, op: &KeyOperation) -> bool {
    key_ops.is_some_and(|ops| ops.contains(op))
}
