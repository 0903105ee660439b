use alloc::{string::String, vec::Vec};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::{KeyOperation, KeyOperations, KeyType};
use crate::{
    base64_url::{self, DecodeError},
    crypto::{CryptoProvider, DefaultProvider},
    jwa::{self, HashAlgorithm},
    Result,
};

/// An RSA public key in JWK form that encrypts using RSAES-OAEP.
///
/// The `n` and `e` members are stored as received and decoded on use, so a
/// malformed member only surfaces when the key is actually used.
///
/// ```
/// # use jwk_pubkey::jwk::{EncryptionKey, KeyOperation};
/// let key = EncryptionKey::builder("AQAB", "AQAB")
///     .algorithm(String::from("RSA-OAEP-256"))
///     .key_operations([KeyOperation::Encrypt].into_iter().collect::<jwk_pubkey::jwk::KeyOperations>())
///     .build();
///
/// assert!(key.encryption_allowed());
/// assert_eq!(key.exponent().unwrap(), [1, 0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionKey {
    kty: KeyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key_ops: Option<KeyOperations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ext: Option<bool>,
    n: String,
    e: String,
}

impl EncryptionKey {
    /// Starts building a key from the base64url encoded modulus `n` and
    /// public exponent `e`.
    pub fn builder(n: impl Into<String>, e: impl Into<String>) -> EncryptionKeyBuilder {
        EncryptionKeyBuilder {
            key_type: KeyType::Rsa,
            algorithm: None,
            key_operations: None,
            extractable: None,
            n: n.into(),
            e: e.into(),
        }
    }

    /// The `kty` member. It is not checked by [`encrypt`](Self::encrypt).
    pub fn key_type(&self) -> &KeyType {
        &self.kty
    }

    /// The `alg` member.
    pub fn algorithm(&self) -> Option<&str> {
        self.alg.as_deref()
    }

    /// The `key_ops` member.
    pub fn key_operations(&self) -> Option<&KeyOperations> {
        self.key_ops.as_ref()
    }

    /// The `ext` member.
    pub fn extractable(&self) -> Option<bool> {
        self.ext
    }

    /// The raw modulus, decoded from the `n` member.
    ///
    /// # Errors
    ///
    /// Fails if `n` is not valid base64url.
    pub fn modulus(&self) -> Result<Vec<u8>, DecodeError> {
        base64_url::decode(&self.n)
    }

    /// The raw public exponent, decoded from the `e` member.
    ///
    /// # Errors
    ///
    /// Fails if `e` is not valid base64url.
    pub fn exponent(&self) -> Result<Vec<u8>, DecodeError> {
        base64_url::decode(&self.e)
    }

    /// Whether the `key_ops` member contains `encrypt`.
    pub fn encryption_allowed(&self) -> bool {
        super::permits(self.key_ops.as_ref(), &KeyOperation::Encrypt)
    }

    /// The OAEP hash implied by the `alg` member.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAlgorithm`](crate::Error::UnsupportedAlgorithm)
    /// if `alg` is absent or not one of the `RSA-OAEP` variants.
    pub fn padding(&self) -> Result<HashAlgorithm> {
        jwa::padding_for(self.alg.as_deref().unwrap_or_default())
    }

    /// Encrypts `plaintext` using the [`DefaultProvider`].
    ///
    /// See [`encrypt_with`](Self::encrypt_with).
    ///
    /// # Errors
    ///
    /// See [`encrypt_with`](Self::encrypt_with).
    pub fn encrypt(&self, plaintext: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        self.encrypt_with(&DefaultProvider, plaintext)
    }

    /// Encrypts `plaintext` with RSAES-OAEP using the given provider.
    ///
    /// If the `key_ops` member does not permit `encrypt` an empty ciphertext
    /// is returned and the provider is never called.
    ///
    /// # Errors
    ///
    /// * [`Error::UnsupportedAlgorithm`](crate::Error::UnsupportedAlgorithm)
    ///   if `alg` is not an `RSA-OAEP` variant
    /// * [`Error::Format`](crate::Error::Format) if `n` or `e` is not valid
    ///   base64url
    /// * [`Error::Crypto`](crate::Error::Crypto) if the provider rejects the
    ///   key or the plaintext
    pub fn encrypt_with<P>(&self, provider: &P, plaintext: impl AsRef<[u8]>) -> Result<Vec<u8>>
    where
        P: CryptoProvider + ?Sized,
    {
        if !self.encryption_allowed() {
            debug!("`key_ops` does not contain `encrypt`, returning an empty ciphertext");
            return Ok(Vec::new());
        }

        let hash = self.padding()?;
        trace!("encrypting with RSAES-OAEP using {hash}");

        let modulus = self.modulus()?;
        let exponent = self.exponent()?;

        let ciphertext = provider.rsa_encrypt_oaep(&modulus, &exponent, plaintext.as_ref(), hash)?;
        Ok(ciphertext)
    }
}

/// The builder for an [`EncryptionKey`].
#[derive(Debug, Clone)]
pub struct EncryptionKeyBuilder {
    key_type: KeyType,
    algorithm: Option<String>,
    key_operations: Option<KeyOperations>,
    extractable: Option<bool>,
    n: String,
    e: String,
}

impl EncryptionKeyBuilder {
    gen_builder_methods! {
        algorithm: String,
        key_operations: KeyOperations,
        extractable: bool,
    }

    /// Override the `key_type` for this JWK.
    #[inline]
    pub fn key_type(mut self, key_type: KeyType) -> Self {
        self.key_type = key_type;
        self
    }

    /// Construct the final [`EncryptionKey`].
    pub fn build(self) -> EncryptionKey {
        EncryptionKey {
            kty: self.key_type,
            alg: self.algorithm,
            key_ops: self.key_operations,
            ext: self.extractable,
            n: self.n,
            e: self.e,
        }
    }
}
