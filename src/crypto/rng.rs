// src/crypto/rng.rs
//! Secure randomness for salt generation.
//!
//! A thread-local `OsRng` feeds every salt draw. Unlike most uses of `OsRng`,
//! fill failures are propagated: an exhausted or broken entropy source aborts
//! the derivation instead of silently producing a weak salt.

use rand::{rngs::OsRng, TryRngCore};
use std::cell::RefCell;

use crate::error::ScryptKdfError;

// Thread-local OsRng wrapped in RefCell so we can mutably borrow it
thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

/// Fill `dest` with cryptographically secure random bytes.
///
/// # Errors
///
/// [`ScryptKdfError::RandomSource`] if the OS entropy source fails. Not
/// retried internally.
pub fn fill_secure(dest: &mut [u8]) -> Result<(), ScryptKdfError> {
    RNG.with(|rng_cell| rng_cell.borrow_mut().try_fill_bytes(dest))
        .map_err(|e| ScryptKdfError::RandomSource(e.to_string()))
}
