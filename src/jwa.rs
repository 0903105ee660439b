//! The algorithm, curve and hash names understood by this crate.
//!
//! Names follow the [IANA `JSON Web Signature and Encryption Algorithms`
//! registry][1] and the [JSON Web Key Elliptic Curve registry][2]. Hash names
//! use the WebCrypto spelling (`SHA-256`) that clients pass to
//! [`VerificationKey::verify`](crate::jwk::VerificationKey::verify).
//!
//! [1]: <https://www.iana.org/assignments/jose/jose.xhtml#web-signature-encryption-algorithms>
//! [2]: <https://www.iana.org/assignments/jose/jose.xhtml#web-key-elliptic-curve>

mod curve;
mod hash;
mod rsaes_oaep;

#[doc(inline)]
pub use self::{
    curve::EllipticCurve,
    hash::HashAlgorithm,
    rsaes_oaep::{padding_for, RsaesOaep},
};
