//! Helpers for base64 urlsafe encoded stuff
//!
//! JWK members such as `n`, `e`, `x` and `y` are base64url encoded without
//! padding. Every decoder in this crate goes through [`decode`], so padded and
//! unpadded input is treated the same everywhere.

use alloc::{string::String, vec::Vec};

use base64ct::{Base64, Base64UrlUnpadded, Encoding};
use thiserror::Error;

/// Error type indicating that a string is not a valid Base64Url (or Base64)
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The length of the string can never be produced by base64, i.e. it is
    /// one more than a multiple of four.
    #[error("invalid base64url length {0}")]
    InvalidLength(usize),
    /// The string contains characters outside of the alphabet or misplaced
    /// padding.
    #[error("the string is not a valid Base64Url representation")]
    InvalidEncoding,
}

/// Decodes a base64url string, with or without padding, into its raw bytes.
///
/// This is the same as decoding `s` with the standard base64 alphabet after
/// replacing `-` with `+`, `_` with `/` and padding it to a multiple of four.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidLength`] if the length of `s` modulo four is
/// one and [`DecodeError::InvalidEncoding`] if it contains invalid characters.
///
/// Decoding is strict about the unused low bits of the last character: they
/// must be zero, so `"AR"` is rejected while the canonical `"AQ"` decodes to
/// `[1]`. Every encoder following RFC 4648 produces canonical output.
pub fn decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    let standard = to_standard(s)?;
    decode_standard(&standard)
}

/// Decodes a padded base64 string using the standard alphabet.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidEncoding`] if `s` is not canonical, padded
/// base64.
pub fn decode_standard(s: &str) -> Result<Vec<u8>, DecodeError> {
    Base64::decode_vec(s).map_err(|_| DecodeError::InvalidEncoding)
}

/// Encodes the given bytes using the unpadded Base64Url format.
#[inline]
pub fn encode(x: impl AsRef<[u8]>) -> String {
    Base64UrlUnpadded::encode_string(x.as_ref())
}

/// Rewrites a base64url string into padded standard base64.
fn to_standard(s: &str) -> Result<String, DecodeError> {
    let mut standard: String = s
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();

    match standard.len() % 4 {
        0 => {}
        2 => standard.push_str("=="),
        3 => standard.push('='),
        _ => return Err(DecodeError::InvalidLength(s.len())),
    }

    Ok(standard)
}
