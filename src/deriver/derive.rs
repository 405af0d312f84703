//! src/deriver/derive.rs

use secure_gate::RevealSecret;

use crate::aliases::DerivedKey64;
use crate::consts::{DERIVED_KEY_LEN, SALT_LEN, SIGNING_KEY_RANGE};
use crate::crypto::kdf::derive_scrypt_key;
use crate::crypto::rng::fill_secure;
use crate::error::ScryptKdfError;
use crate::params::Params;
use crate::record::{append_checksum, append_signature, encode_header, Record};

/// Derive a key from `password` and package it as a fresh 96-byte record.
///
/// Draws a new 32-byte salt, runs scrypt with `params`, and signs the record
/// with the second half of the scrypt output. Two calls with identical inputs
/// produce different records (fresh salt every time).
///
/// This function is synchronous and safe to call concurrently; each call
/// consumes roughly `128 * r * 2^log_n` bytes of memory while scrypt runs, so
/// bound concurrency externally if that matters.
///
/// # Errors
///
/// - [`ScryptKdfError::RandomSource`] — the entropy source failed.
/// - [`ScryptKdfError::InvalidParameters`] — scrypt rejected `params`.
///
/// No partial record is ever returned.
///
/// # Example
///
/// ```
/// use scrypt_kdf_rs::{derive, Params};
///
/// # fn main() -> Result<(), scrypt_kdf_rs::ScryptKdfError> {
/// // cheap parameters to keep the example fast; prefer Params::default()
/// let record = derive(b"open sesame", Params::new(12, 8, 1))?;
/// assert_eq!(record.as_bytes().len(), 96);
/// # Ok(())
/// # }
/// ```
pub fn derive(password: &[u8], params: Params) -> Result<Record, ScryptKdfError> {
    let mut salt = [0u8; SALT_LEN];
    fill_secure(&mut salt)?;

    let header = encode_header(&params, &salt);
    let body = append_checksum(header);

    let mut key = DerivedKey64::new([0u8; DERIVED_KEY_LEN]);
    derive_scrypt_key(password, &salt, &params, &mut key)?;

    Ok(append_signature(body, &key.expose_secret()[SIGNING_KEY_RANGE]))
}
