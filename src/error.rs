//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, ScryptKdfError>`](ScryptKdfError).

use thiserror::Error;

/// The error type for all derivation and verification operations.
///
/// `verify` never reports a wrong password through this type: a mismatched
/// attempt is `Ok(false)`. An `Err` always means the input record or the
/// runtime environment is at fault, and the caller must branch on it before
/// trusting any boolean result.
#[derive(Error, Debug)]
pub enum ScryptKdfError {
    /// The operating-system entropy source failed while drawing a salt.
    ///
    /// Fatal to the current derivation; the library performs no internal
    /// retries. Retry policy belongs to the caller.
    #[error("random source failure: {0}")]
    RandomSource(String),

    /// The scrypt primitive rejected the `(N, r, p)` combination.
    ///
    /// Raised both when deriving with bad caller-supplied parameters and when
    /// verifying a record whose stored parameters are out of range for the
    /// runtime (overflowing block counts, zero `r` or `p`, `log_n` too large).
    #[error("invalid scrypt parameters: {0}")]
    InvalidParameters(String),

    /// The input to `verify` or `decode` is not exactly 96 bytes.
    ///
    /// This is a caller-usage error, deliberately distinct from a password
    /// mismatch (which is `Ok(false)`).
    #[error("invalid record length: {0} bytes (expected 96)")]
    InvalidRecordLength(usize),
}
