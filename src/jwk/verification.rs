use alloc::string::String;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{KeyOperation, KeyOperations, KeyType};
use crate::{
    base64_url::{self, DecodeError},
    crypto::{self, CryptoProvider, DefaultProvider},
    jwa::{EllipticCurve, HashAlgorithm},
};

/// The reasons a [`VerificationKey`] refuses to verify a signature.
///
/// [`VerificationKey::verify`] collapses all of them into `false`, use
/// [`VerificationKey::check`] to inspect them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VerifyError {
    /// The `key_ops` member is absent or does not contain `verify`.
    #[error("`key_ops` does not permit `verify`")]
    OperationNotPermitted,
    /// The `kty` member is not `EC`.
    #[error("expected key type `EC`, found `{0}`")]
    KeyType(KeyType),
    /// The requested hash algorithm is unknown.
    #[error("unsupported hash algorithm `{0}`")]
    UnsupportedHash(String),
    /// The `crv` member is absent or names an unsupported curve.
    #[error("unsupported curve {0:?}")]
    UnsupportedCurve(Option<String>),
    /// The signature is not valid base64.
    #[error("invalid signature encoding: {0}")]
    Signature(#[source] DecodeError),
    /// The `x` or `y` member is not valid base64url.
    #[error("invalid coordinate encoding: {0}")]
    Coordinate(#[source] DecodeError),
    /// The backend rejected the public point.
    #[error(transparent)]
    Crypto(#[from] crypto::Error),
}

/// An EC public key in JWK form that verifies ECDSA signatures.
///
/// Verification never fails loudly: every problem, from a missing `verify`
/// permission to a malformed coordinate, results in `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationKey {
    kty: KeyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    crv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key_ops: Option<KeyOperations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ext: Option<bool>,
    x: String,
    y: String,
}

impl VerificationKey {
    /// Starts building a key from the base64url encoded coordinates `x` and
    /// `y` of the public point.
    pub fn builder(x: impl Into<String>, y: impl Into<String>) -> VerificationKeyBuilder {
        VerificationKeyBuilder {
            key_type: KeyType::Ec,
            curve: None,
            key_operations: None,
            extractable: None,
            x: x.into(),
            y: y.into(),
        }
    }

    /// The `kty` member.
    pub fn key_type(&self) -> &KeyType {
        &self.kty
    }

    /// The `crv` member.
    pub fn curve(&self) -> Option<&str> {
        self.crv.as_deref()
    }

    /// The `key_ops` member.
    pub fn key_operations(&self) -> Option<&KeyOperations> {
        self.key_ops.as_ref()
    }

    /// The `ext` member.
    pub fn extractable(&self) -> Option<bool> {
        self.ext
    }

    /// Verifies `signature_base64` over `message` using the
    /// [`DefaultProvider`].
    ///
    /// See [`verify_with`](Self::verify_with).
    pub fn verify(
        &self,
        hash_algorithm: &str,
        message: impl AsRef<[u8]>,
        signature_base64: &str,
    ) -> bool {
        self.verify_with(&DefaultProvider, hash_algorithm, message, signature_base64)
    }

    /// Verifies the ECDSA signature `signature_base64`, the `r || s` bytes in
    /// padded standard base64, over `message` hashed with `hash_algorithm`
    /// (`SHA-1`, `SHA-256`, `SHA-384` or `SHA-512`).
    ///
    /// Returns `true` only if every check passes and the signature is valid.
    pub fn verify_with<P>(
        &self,
        provider: &P,
        hash_algorithm: &str,
        message: impl AsRef<[u8]>,
        signature_base64: &str,
    ) -> bool
    where
        P: CryptoProvider + ?Sized,
    {
        match self.check_with(provider, hash_algorithm, message, signature_base64) {
            Ok(true) => true,
            Ok(false) => {
                debug!("signature does not match the message");
                false
            }
            Err(err) => {
                debug!("signature rejected: {err}");
                false
            }
        }
    }

    /// Like [`verify`](Self::verify), but reports why a signature was
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`VerifyError`] if the key or the inputs can not be used.
    /// A well-formed but wrong signature is `Ok(false)`.
    pub fn check(
        &self,
        hash_algorithm: &str,
        message: impl AsRef<[u8]>,
        signature_base64: &str,
    ) -> Result<bool, VerifyError> {
        self.check_with(&DefaultProvider, hash_algorithm, message, signature_base64)
    }

    /// Like [`verify_with`](Self::verify_with), but reports why a signature
    /// was rejected.
    ///
    /// # Errors
    ///
    /// See [`check`](Self::check).
    pub fn check_with<P>(
        &self,
        provider: &P,
        hash_algorithm: &str,
        message: impl AsRef<[u8]>,
        signature_base64: &str,
    ) -> Result<bool, VerifyError>
    where
        P: CryptoProvider + ?Sized,
    {
        if !super::permits(self.key_ops.as_ref(), &KeyOperation::Verify) {
            return Err(VerifyError::OperationNotPermitted);
        }

        if self.kty != KeyType::Ec {
            return Err(VerifyError::KeyType(self.kty.clone()));
        }

        let hash = HashAlgorithm::from_name(hash_algorithm)
            .ok_or_else(|| VerifyError::UnsupportedHash(String::from(hash_algorithm)))?;

        let curve = self
            .crv
            .as_deref()
            .and_then(EllipticCurve::from_name)
            .ok_or_else(|| VerifyError::UnsupportedCurve(self.crv.clone()))?;

        let signature =
            base64_url::decode_standard(signature_base64).map_err(VerifyError::Signature)?;
        let x = base64_url::decode(&self.x).map_err(VerifyError::Coordinate)?;
        let y = base64_url::decode(&self.y).map_err(VerifyError::Coordinate)?;

        let valid = provider.ecdsa_verify(curve, &x, &y, message.as_ref(), &signature, hash)?;
        Ok(valid)
    }
}

/// The builder for a [`VerificationKey`].
#[derive(Debug, Clone)]
pub struct VerificationKeyBuilder {
    key_type: KeyType,
    curve: Option<String>,
    key_operations: Option<KeyOperations>,
    extractable: Option<bool>,
    x: String,
    y: String,
}

impl VerificationKeyBuilder {
    gen_builder_methods! {
        curve: String,
        key_operations: KeyOperations,
        extractable: bool,
    }

    /// Override the `key_type` for this JWK.
    #[inline]
    pub fn key_type(mut self, key_type: KeyType) -> Self {
        self.key_type = key_type;
        self
    }

    /// Construct the final [`VerificationKey`].
    pub fn build(self) -> VerificationKey {
        VerificationKey {
            kty: self.key_type,
            crv: self.curve,
            key_ops: self.key_operations,
            ext: self.extractable,
            x: self.x,
            y: self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::cell::Cell;

    use super::*;

    /// Panics on encryption and answers verification with a fixed result.
    struct FixedProvider {
        result: bool,
        calls: Cell<usize>,
    }

    impl FixedProvider {
        fn new(result: bool) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl CryptoProvider for FixedProvider {
        fn rsa_encrypt_oaep(
            &self,
            _: &[u8],
            _: &[u8],
            _: &[u8],
            _: HashAlgorithm,
        ) -> crypto::Result<Vec<u8>> {
            unreachable!("verification never encrypts")
        }

        fn ecdsa_verify(
            &self,
            curve: EllipticCurve,
            x: &[u8],
            y: &[u8],
            message: &[u8],
            signature: &[u8],
            _: HashAlgorithm,
        ) -> crypto::Result<bool> {
            self.calls.set(self.calls.get() + 1);
            assert_eq!(curve, EllipticCurve::P256);
            assert_eq!(x, [1, 0, 1]);
            assert_eq!(y, [1, 2]);
            assert_eq!(message, b"Test message");
            assert_eq!(signature, [1]);
            Ok(self.result)
        }
    }

    fn key() -> VerificationKeyBuilder {
        VerificationKey::builder("AQAB", "AQI")
            .curve(String::from("P-256"))
            .extractable(true)
            .key_operations([KeyOperation::Verify].into_iter().collect::<KeyOperations>())
    }

    #[test]
    fn well_formed_reaches_provider() {
        for result in [true, false] {
            let provider = FixedProvider::new(result);
            let key = key().build();

            assert_eq!(
                key.verify_with(&provider, "SHA-256", "Test message", "AQ=="),
                result
            );
            assert_eq!(provider.calls.get(), 1);
        }
    }

    #[test]
    fn missing_key_ops() {
        let provider = FixedProvider::new(true);

        let absent = key().key_operations(None::<KeyOperations>).build();
        assert!(!absent.verify_with(&provider, "SHA-256", "Test message", "AQ=="));
        assert!(matches!(
            absent.check_with(&provider, "SHA-256", "Test message", "AQ=="),
            Err(VerifyError::OperationNotPermitted)
        ));

        let sign_only = key()
            .key_operations([KeyOperation::Sign].into_iter().collect::<KeyOperations>())
            .build();
        assert!(!sign_only.verify_with(&provider, "SHA-256", "Test message", "AQ=="));

        assert_eq!(provider.calls.get(), 0);
    }

    #[test]
    fn wrong_key_type() {
        let provider = FixedProvider::new(true);
        let key = key().key_type(KeyType::Rsa).build();

        assert!(matches!(
            key.check_with(&provider, "SHA-256", "Test message", "AQ=="),
            Err(VerifyError::KeyType(KeyType::Rsa))
        ));
        assert!(!key.verify_with(&provider, "SHA-256", "Test message", "AQ=="));
        assert_eq!(provider.calls.get(), 0);
    }

    #[test]
    fn unsupported_hash() {
        let provider = FixedProvider::new(true);
        let key = key().build();

        for hash in ["MD5", "SHA256", "sha-256", ""] {
            assert!(matches!(
                key.check_with(&provider, hash, "Test message", "AQ=="),
                Err(VerifyError::UnsupportedHash(name)) if name == hash
            ));
        }
        assert_eq!(provider.calls.get(), 0);
    }

    #[test]
    fn unsupported_curve() {
        let provider = FixedProvider::new(true);

        for crv in [Some("P-999"), Some("secp256k1"), None] {
            let key = key().curve(crv.map(String::from)).build();
            assert!(matches!(
                key.check_with(&provider, "SHA-256", "Test message", "AQ=="),
                Err(VerifyError::UnsupportedCurve(found)) if found.as_deref() == crv
            ));
        }
        assert_eq!(provider.calls.get(), 0);
    }

    #[test]
    fn malformed_input() {
        let provider = FixedProvider::new(true);

        let key = key().build();
        assert!(matches!(
            key.check_with(&provider, "SHA-256", "Test message", "AQ"),
            Err(VerifyError::Signature(_))
        ));

        let key = VerificationKey::builder("fakeX", "fakeY")
            .curve(String::from("P-256"))
            .key_operations([KeyOperation::Verify].into_iter().collect::<KeyOperations>())
            .build();
        assert!(matches!(
            key.check_with(&provider, "SHA-256", "Test message", "AQ=="),
            Err(VerifyError::Coordinate(DecodeError::InvalidLength(5)))
        ));
        assert!(!key.verify_with(&provider, "SHA-256", "Test message", "AQ=="));

        assert_eq!(provider.calls.get(), 0);
    }
}
