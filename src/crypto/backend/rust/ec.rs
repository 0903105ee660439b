use alloc::vec::Vec;

use digest::Digest as _;
use ecdsa::{hazmat::VerifyPrimitive, SignatureSize, VerifyingKey};
use elliptic_curve::{
    generic_array::{typenum::Unsigned as _, ArrayLength},
    sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint},
    AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, PrimeCurve,
};
use p256::NistP256;
use p384::NistP384;
use p521::NistP521;
use signature::hazmat::PrehashVerifier as _;

use crate::{
    crypto::{backend::interface::ec, Result},
    jwa::{EllipticCurve, HashAlgorithm},
};

#[derive(Clone)]
enum ErasedPublicKey {
    P256(VerifyingKey<NistP256>),
    P384(VerifyingKey<NistP384>),
    P521(VerifyingKey<NistP521>),
}

fn to_field_bytes<C: elliptic_curve::Curve>(
    bytes: &[u8],
) -> Result<&FieldBytes<C>, super::BackendError> {
    if bytes.len() != C::FieldBytesSize::USIZE {
        return Err(super::BackendError::InvalidEcPoint {
            expected: C::FieldBytesSize::USIZE,
            actual: bytes.len(),
        });
    }

    Ok(FieldBytes::<C>::from_slice(bytes))
}

fn hash_message(hash: HashAlgorithm, msg: &[u8]) -> Vec<u8> {
    match hash {
        HashAlgorithm::Sha1 => sha1::Sha1::digest(msg).to_vec(),
        HashAlgorithm::Sha256 => sha2::Sha256::digest(msg).to_vec(),
        HashAlgorithm::Sha384 => sha2::Sha384::digest(msg).to_vec(),
        HashAlgorithm::Sha512 => sha2::Sha512::digest(msg).to_vec(),
    }
}

fn verify_typed<C>(key: &VerifyingKey<C>, prehash: &[u8], signature: &[u8]) -> bool
where
    C: PrimeCurve + CurveArithmetic,
    AffinePoint<C>: VerifyPrimitive<C>,
    SignatureSize<C>: ArrayLength<u8>,
{
    let Ok(sig) = ecdsa::Signature::<C>::from_slice(signature) else {
        return false;
    };

    // `verify_prehash` refuses digests shorter than half the field size. A
    // digest left-padded to the field size is the same integer.
    let mut padded = FieldBytes::<C>::default();
    let prehash = match padded.len().checked_sub(prehash.len()) {
        Some(offset) if offset > 0 => {
            padded[offset..].copy_from_slice(prehash);
            &padded[..]
        }
        _ => prehash,
    };

    key.verify_prehash(prehash, &sig).is_ok()
}

/// A low level public EC key.
#[derive(Clone)]
#[repr(transparent)]
pub(crate) struct PublicKey {
    inner: ErasedPublicKey,
}

impl ec::PublicKey for PublicKey {
    fn new(curve: EllipticCurve, x: &[u8], y: &[u8]) -> Result<Self> {
        fn new_typed<C>(x: &[u8], y: &[u8]) -> Result<VerifyingKey<C>>
        where
            C: PrimeCurve + CurveArithmetic,
            AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C> + VerifyPrimitive<C>,
            FieldBytesSize<C>: ModulusSize,
            SignatureSize<C>: ArrayLength<u8>,
        {
            let x = to_field_bytes::<C>(x)?;
            let y = to_field_bytes::<C>(y)?;

            let point = EncodedPoint::<C>::from_affine_coordinates(x, y, false);
            let key = VerifyingKey::<C>::from_encoded_point(&point)
                .map_err(|_| super::BackendError::InvalidEcKey)?;
            Ok(key)
        }

        let inner = match curve {
            EllipticCurve::P256 => ErasedPublicKey::P256(new_typed::<NistP256>(x, y)?),
            EllipticCurve::P384 => ErasedPublicKey::P384(new_typed::<NistP384>(x, y)?),
            EllipticCurve::P521 => ErasedPublicKey::P521(new_typed::<NistP521>(x, y)?),
        };

        Ok(Self { inner })
    }

    fn verify(&mut self, hash: HashAlgorithm, msg: &[u8], signature: &[u8]) -> Result<bool> {
        let prehash = hash_message(hash, msg);

        Ok(match self.inner {
            ErasedPublicKey::P256(ref key) => verify_typed(key, &prehash, signature),
            ErasedPublicKey::P384(ref key) => verify_typed(key, &prehash, signature),
            ErasedPublicKey::P521(ref key) => verify_typed(key, &prehash, signature),
        })
    }
}
