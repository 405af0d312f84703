//! # Type Aliases
//!
//! HMAC primitive and secure buffer aliases used across the library.
//!
//! The derived scrypt output is the only long-lived secret this crate holds
//! in memory; it lives in a [`secure-gate`](https://github.com/Slurp9187/secure-gate)
//! fixed buffer that zeroizes on drop and requires explicit
//! `.expose_secret()` / `.expose_secret_mut()` access. Records themselves are
//! public data (they are designed to be stored) and use plain byte arrays.

use hmac::Hmac;
use sha2::Sha256;

/// HMAC-SHA256, used to sign the first 64 bytes of a record.
pub type HmacSha256 = Hmac<Sha256>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

/// Full 64-byte scrypt output. The second half keys the record signature; the
/// first half is reserved encryption material (see `consts::SIGNING_KEY_RANGE`).
pub type DerivedKey64 = SpanBuffer<64>;
