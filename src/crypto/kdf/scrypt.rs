//! src/crypto/kdf/scrypt.rs
//! scrypt invocation — out-param into a zeroizing buffer

use secure_gate::RevealSecretMut;

use crate::aliases::DerivedKey64;
use crate::consts::DERIVED_KEY_LEN;
use crate::error::ScryptKdfError;
use crate::params::Params;

/// Derive the full 64-byte scrypt output directly into `out_key`.
///
/// The memory-hard work happens here: roughly `128 * r * 2^log_n` bytes and
/// proportional CPU time per call. Runs to completion or fails synchronously;
/// there is no cancellation.
///
/// # Errors
///
/// [`ScryptKdfError::InvalidParameters`] when the primitive rejects the
/// `(N, r, p)` combination (zero `r`/`p`, `log_n` out of range, overflowing
/// block counts).
pub fn derive_scrypt_key(
    password: &[u8],
    salt: &[u8],
    params: &Params,
    out_key: &mut DerivedKey64,
) -> Result<(), ScryptKdfError> {
    let scrypt_params = scrypt::Params::new(params.log_n, params.r, params.p, DERIVED_KEY_LEN)
        .map_err(|e| ScryptKdfError::InvalidParameters(e.to_string()))?;

    scrypt::scrypt(password, salt, &scrypt_params, out_key.expose_secret_mut())
        .map_err(|e| ScryptKdfError::InvalidParameters(e.to_string()))?;

    Ok(())
}
