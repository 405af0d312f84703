// src/lib.rs

//! Derive and verify scrypt password keys packaged in the 96-byte
//! `scrypt-kdf` container format.
//!
//! A derivation produces a self-describing blob carrying the cost parameters,
//! a fresh salt, a corruption checksum, and an HMAC signature keyed with
//! material derived from the password itself. Store the blob instead of the
//! password; verification re-derives from the attempted password using the
//! blob's own salt and parameters and compares whole records in constant
//! time. Records round-trip byte-for-byte with other implementations of the
//! same interchange format (as produced by the Node.js `scrypt-kdf` package).
//!
//! ```
//! use scrypt_kdf_rs::{derive, verify, Params};
//!
//! # fn main() -> Result<(), scrypt_kdf_rs::ScryptKdfError> {
//! // cheap parameters to keep the example fast; prefer Params::default()
//! let record = derive(b"open sesame", Params::new(12, 8, 1))?;
//!
//! assert!(verify(record.as_bytes(), b"open sesame")?);
//! assert!(!verify(record.as_bytes(), b"not the password")?);
//! # Ok(())
//! # }
//! ```

pub mod aliases;
pub mod consts;
pub mod crypto;
pub mod deriver;
pub mod error;
pub mod params;
pub mod record;
pub mod verifier;

// High-level API — this is what 99% of users import
pub use deriver::derive;
pub use error::ScryptKdfError;
pub use params::Params;
pub use verifier::verify;

// Record codec — public because stored blobs are self-describing and callers
// legitimately inspect them (cost migration checks, corruption probes)
pub use record::{decode, DecodedRecord, Record};
