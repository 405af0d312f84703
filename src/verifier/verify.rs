//! src/verifier/verify.rs

use subtle::ConstantTimeEq;

use secure_gate::RevealSecret;

use crate::aliases::DerivedKey64;
use crate::consts::{DERIVED_KEY_LEN, SIGNING_KEY_RANGE};
use crate::crypto::kdf::derive_scrypt_key;
use crate::error::ScryptKdfError;
use crate::record::{append_checksum, append_signature, decode, encode_header};

/// Test whether `attempt` matches the password a stored record was derived
/// from.
///
/// Re-runs the full derivation with the salt and parameters extracted from
/// `record` (never fresh randomness), rebuilds the candidate record from
/// scratch, and compares the two whole 96-byte sequences in constant time.
/// The comparison never short-circuits on the first differing byte, so timing
/// does not leak how many leading bytes matched.
///
/// Stateless and safe to call concurrently; each call pays the full scrypt
/// cost encoded in the record.
///
/// # Errors
///
/// - [`ScryptKdfError::InvalidRecordLength`] — `record` is not exactly
///   96 bytes. A caller-usage error, never to be conflated with a wrong
///   password.
/// - [`ScryptKdfError::InvalidParameters`] — the stored parameters are out of
///   range for the runtime. The comparison still runs (keyed with a zeroed
///   buffer, a deterministic mismatch) so that the error path has no distinct
///   timing shape, and the error is then surfaced.
///
/// A wrong password is `Ok(false)`, not an error. The boolean is
/// authoritative only when the result is `Ok`.
pub fn verify(record: &[u8], attempt: &[u8]) -> Result<bool, ScryptKdfError> {
    let stored = decode(record)?;

    let header = encode_header(&stored.params, &stored.salt);
    let body = append_checksum(header);

    let mut key = DerivedKey64::new([0u8; DERIVED_KEY_LEN]);
    let derivation = derive_scrypt_key(attempt, &stored.salt, &stored.params, &mut key);

    let candidate = append_signature(body, &key.expose_secret()[SIGNING_KEY_RANGE]);
    let matched = bool::from(record.ct_eq(candidate.as_bytes().as_slice()));

    derivation?;
    Ok(matched)
}
