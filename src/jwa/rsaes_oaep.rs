use super::HashAlgorithm;

/// Key Encryption with RSAES OAEP as defined in [section 4.3 of RFC 7518]
///
/// The SHA-384 and SHA-512 variants are not part of RFC 7518, but are
/// registered by WebCrypto and commonly found in JWKs exported by browsers.
///
/// [section 4.3 of RFC 7518]: <https://datatracker.ietf.org/doc/html/rfc7518#section-4.3>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RsaesOaep {
    /// RSAES OAEP using default parameters (SHA-1 and MGF1 with SHA-1)
    RsaesOaep,
    /// RSAES OAEP using SHA-256 and MGF1 with SHA-256
    RsaesOaep256,
    /// RSAES OAEP using SHA-384 and MGF1 with SHA-384
    RsaesOaep384,
    /// RSAES OAEP using SHA-512 and MGF1 with SHA-512
    RsaesOaep512,
}

impl RsaesOaep {
    /// The hash used for both the label digest and MGF1.
    pub const fn hash(&self) -> HashAlgorithm {
        match self {
            Self::RsaesOaep => HashAlgorithm::Sha1,
            Self::RsaesOaep256 => HashAlgorithm::Sha256,
            Self::RsaesOaep384 => HashAlgorithm::Sha384,
            Self::RsaesOaep512 => HashAlgorithm::Sha512,
        }
    }
}

impl_serde_jwa!(
    RsaesOaep,
    crate::Error::UnsupportedAlgorithm,
    [
        "RSA-OAEP" => Self::RsaesOaep; Self::RsaesOaep,
        "RSA-OAEP-256" => Self::RsaesOaep256; Self::RsaesOaep256,
        "RSA-OAEP-384" => Self::RsaesOaep384; Self::RsaesOaep384,
        "RSA-OAEP-512" => Self::RsaesOaep512; Self::RsaesOaep512,
    ]
);

/// Maps the `alg` member of an RSA JWK to the OAEP hash it implies.
///
/// # Errors
///
/// Returns [`Error::UnsupportedAlgorithm`](crate::Error::UnsupportedAlgorithm)
/// for anything but the four `RSA-OAEP` variants.
pub fn padding_for(algorithm: &str) -> crate::Result<HashAlgorithm> {
    algorithm.parse::<RsaesOaep>().map(|alg| alg.hash())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oaep_hashes() {
        assert_eq!(padding_for("RSA-OAEP").ok(), Some(HashAlgorithm::Sha1));
        assert_eq!(padding_for("RSA-OAEP-256").ok(), Some(HashAlgorithm::Sha256));
        assert_eq!(padding_for("RSA-OAEP-384").ok(), Some(HashAlgorithm::Sha384));
        assert_eq!(padding_for("RSA-OAEP-512").ok(), Some(HashAlgorithm::Sha512));
    }

    #[test]
    fn unsupported() {
        for alg in ["RSA-PKCS1", "RSA1_5", "rsa-oaep", ""] {
            assert!(matches!(
                padding_for(alg),
                Err(crate::Error::UnsupportedAlgorithm(name)) if name == alg
            ));
        }
    }
}
