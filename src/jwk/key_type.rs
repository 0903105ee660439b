use alloc::string::String;
use core::fmt;

use serde::{Deserialize, Serialize};

/// The key type (`kty`) parameter as defined in [Section 4.1 of RFC 7517].
///
/// Only the asymmetric types this crate works with get their own variant.
///
/// [Section 4.1 of RFC 7517]: <https://datatracker.ietf.org/doc/html/rfc7517#section-4.1>
#[non_exhaustive]
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum KeyType {
    /// `RSA`
    Rsa,
    /// `EC`
    Ec,
    /// Any other case-sensitive [`String`], e.g. `oct` or `OKP`
    Other(String),
}

impl KeyType {
    /// The name used in the `kty` member.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rsa => "RSA",
            Self::Ec => "EC",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for KeyType {
    fn from(s: &str) -> Self {
        match s {
            "RSA" => Self::Rsa,
            "EC" => Self::Ec,
            _ => Self::Other(String::from(s)),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for KeyType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KeyType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let val = <alloc::borrow::Cow<'_, str>>::deserialize(deserializer)?;
        Ok(KeyType::from(&*val))
    }
}
