use openssl::{
    bn::BigNum,
    ec::{EcGroup, EcKey},
    ecdsa::EcdsaSig,
    nid::Nid,
    pkey::Public,
};

use crate::{
    crypto::{backend::interface::ec, Result},
    jwa::{EllipticCurve, HashAlgorithm},
};

fn ec_group(curve: EllipticCurve) -> Result<EcGroup> {
    let group = match curve {
        EllipticCurve::P256 => EcGroup::from_curve_name(Nid::X9_62_PRIME256V1)?,
        EllipticCurve::P384 => EcGroup::from_curve_name(Nid::SECP384R1)?,
        EllipticCurve::P521 => EcGroup::from_curve_name(Nid::SECP521R1)?,
    };

    Ok(group)
}

/// A low level public EC key.
#[derive(Clone)]
pub(crate) struct PublicKey {
    key: EcKey<Public>,
}

impl ec::PublicKey for PublicKey {
    fn new(curve: EllipticCurve, raw_x: &[u8], raw_y: &[u8]) -> Result<Self> {
        let expected = curve.coordinate_size();
        for actual in [raw_x.len(), raw_y.len()] {
            if actual != expected {
                return Err(super::BackendError::InvalidEcPoint { expected, actual }.into());
            }
        }

        let group = ec_group(curve)?;

        let x = BigNum::from_slice(raw_x)?;
        let y = BigNum::from_slice(raw_y)?;

        let key = EcKey::from_public_key_affine_coordinates(&group, &x, &y)?;
        key.check_key()?;

        Ok(Self { key })
    }

    fn verify(&mut self, hash: HashAlgorithm, msg: &[u8], signature: &[u8]) -> Result<bool> {
        let digest = openssl::hash::hash(super::message_digest(hash), msg)?;

        // the signature is r and s concatenated, OpenSSL wants them as numbers
        let (r, s) = signature.split_at(signature.len() / 2);
        let r = BigNum::from_slice(r)?;
        let s = BigNum::from_slice(s)?;

        let signature = EcdsaSig::from_private_components(r, s)?;
        let valid = signature.verify(&digest, &self.key)?;

        Ok(valid)
    }
}
