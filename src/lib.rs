//! Use public JSON Web Keys for a single operation each.
//!
//! * [`EncryptionKey`](jwk::EncryptionKey) encrypts with RSAES-OAEP using an
//!   `RSA` JWK.
//! * [`VerificationKey`](jwk::VerificationKey) verifies ECDSA signatures
//!   using an `EC` JWK.
//!
//! Both check the `key_ops` member before doing anything. The cryptography
//! itself is provided by a [`CryptoProvider`](crypto::CryptoProvider), by
//! default the library selected with the `crypto-*` feature flags.
//!
//! ```
//! # use jwk_pubkey::jwk::VerificationKey;
//! let key: VerificationKey = serde_json::from_str(
//!     r#"{"kty":"EC","crv":"P-256","key_ops":["sign"],"x":"AQAB","y":"AQAB"}"#,
//! )
//! .unwrap();
//!
//! // the key may not be used for verification
//! assert!(!key.verify("SHA-256", "message", "AQ=="));
//! ```
#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    explicit_outlives_requirements,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc
)]
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    macro_use_extern_crate,
    non_ascii_idents,
    elided_lifetimes_in_paths
)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

mod error;
pub use error::{Error, Result};

pub mod base64_url;
pub mod crypto;
pub mod jwa;
pub mod jwk;
