use alloc::string::String;
use core::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A single entry of the `key_ops` member ([Section 4.3 of RFC 7517]).
///
/// The registered names match the WebCrypto `KeyUsage` strings, so keys
/// exported by a browser carry the same values. Matching is case-sensitive,
/// `"Encrypt"` ends up as [`Other`](Self::Other).
///
/// [Section 4.3 of RFC 7517]: <https://datatracker.ietf.org/doc/html/rfc7517#section-4.3>
#[non_exhaustive]
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum KeyOperation {
    /// `sign`
    Sign,
    /// `verify`, required by [`VerificationKey`](super::VerificationKey)
    Verify,
    /// `encrypt`, required by [`EncryptionKey`](super::EncryptionKey)
    Encrypt,
    /// `decrypt`
    Decrypt,
    /// `wrapKey`
    WrapKey,
    /// `unwrapKey`
    UnwrapKey,
    /// `deriveKey`
    DeriveKey,
    /// `deriveBits`
    DeriveBits,
    /// An unregistered operation, kept verbatim
    Other(String),
}

impl KeyOperation {
    /// The registered name of this operation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sign => "sign",
            Self::Verify => "verify",
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
            Self::WrapKey => "wrapKey",
            Self::UnwrapKey => "unwrapKey",
            Self::DeriveKey => "deriveKey",
            Self::DeriveBits => "deriveBits",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for KeyOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyOperation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "sign" => Self::Sign,
            "verify" => Self::Verify,
            "encrypt" => Self::Encrypt,
            "decrypt" => Self::Decrypt,
            "wrapKey" => Self::WrapKey,
            "unwrapKey" => Self::UnwrapKey,
            "deriveKey" => Self::DeriveKey,
            "deriveBits" => Self::DeriveBits,
            _ => Self::Other(String::from(s)),
        })
    }
}

impl From<&str> for KeyOperation {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(op) => op,
            Err(never) => match never {},
        }
    }
}

impl Serialize for KeyOperation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KeyOperation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let val = <alloc::borrow::Cow<'_, str>>::deserialize(deserializer)?;
        Ok(KeyOperation::from(&*val))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_sensitive() {
        assert_eq!(KeyOperation::from("encrypt"), KeyOperation::Encrypt);
        assert_eq!(
            KeyOperation::from("Encrypt"),
            KeyOperation::Other(String::from("Encrypt"))
        );
        assert_eq!(KeyOperation::from("wrapKey").as_str(), "wrapKey");
    }
}
