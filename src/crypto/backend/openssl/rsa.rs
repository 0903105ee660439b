use alloc::vec::Vec;

use openssl::{
    bn::BigNum,
    encrypt::Encrypter,
    pkey::{PKey, Public},
    rsa::{Padding, Rsa},
};

use crate::{
    crypto::{backend::interface::rsa, Result},
    jwa::HashAlgorithm,
};

/// A low level public RSA key.
#[derive(Clone)]
pub(crate) struct PublicKey {
    key: PKey<Public>,
}

impl rsa::PublicKey for PublicKey {
    fn from_components(c: rsa::PublicKeyComponents<'_>) -> Result<Self> {
        let n = BigNum::from_slice(c.n)?;
        let e = BigNum::from_slice(c.e)?;
        let data = Rsa::from_public_components(n, e)?;

        Ok(Self {
            key: PKey::from_rsa(data)?,
        })
    }

    fn encrypt(&mut self, hash: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>> {
        let digest = super::message_digest(hash);

        let mut encrypter = Encrypter::new(&self.key)?;
        encrypter.set_rsa_padding(Padding::PKCS1_OAEP)?;
        encrypter.set_rsa_oaep_md(digest)?;
        encrypter.set_rsa_mgf1_md(digest)?;

        let mut ciphertext = alloc::vec![0; encrypter.encrypt_len(data)?];
        let len = encrypter.encrypt(data, &mut ciphertext)?;
        ciphertext.truncate(len);

        Ok(ciphertext)
    }
}
