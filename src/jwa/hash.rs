/// The message digests a signature can be verified with, or OAEP can be
/// parameterized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-1
    ///
    /// Only for interoperability with existing keys, SHA-1 is broken for
    /// collision resistance.
    Sha1,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl_serde_jwa!(
    HashAlgorithm,
    crate::Error::UnsupportedAlgorithm,
    [
        "SHA-1" => Self::Sha1; Self::Sha1,
        "SHA-256" => Self::Sha256; Self::Sha256,
        "SHA-384" => Self::Sha384; Self::Sha384,
        "SHA-512" => Self::Sha512; Self::Sha512,
    ]
);
