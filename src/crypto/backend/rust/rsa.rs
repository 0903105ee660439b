use alloc::vec::Vec;

use ::rsa::{BigUint, Oaep, RsaPublicKey};

use crate::{
    crypto::{backend::interface::rsa, Result},
    jwa::HashAlgorithm,
};

/// The largest modulus accepted, 16384 bits.
const MAX_MODULUS_BITS: usize = 16384;

/// A low level public RSA key.
#[derive(Clone)]
#[repr(transparent)]
pub(crate) struct PublicKey {
    inner: RsaPublicKey,
}

impl rsa::PublicKey for PublicKey {
    fn from_components(c: rsa::PublicKeyComponents<'_>) -> Result<Self> {
        let n = BigUint::from_bytes_be(c.n);
        let e = BigUint::from_bytes_be(c.e);
        let key = RsaPublicKey::new_with_max_size(n, e, MAX_MODULUS_BITS)?;

        Ok(Self { inner: key })
    }

    fn encrypt(&mut self, hash: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>> {
        let mut rng = rand_core::OsRng;

        let padding = match hash {
            HashAlgorithm::Sha1 => Oaep::new::<sha1::Sha1>(),
            HashAlgorithm::Sha256 => Oaep::new::<sha2::Sha256>(),
            HashAlgorithm::Sha384 => Oaep::new::<sha2::Sha384>(),
            HashAlgorithm::Sha512 => Oaep::new::<sha2::Sha512>(),
        };

        Ok(self.inner.encrypt(&mut rng, padding, data)?)
    }
}
