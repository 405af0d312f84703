//! Global constants: record layout and recommended defaults.
//!
//! The record is a fixed 96-byte blob with this layout:
//!
//! | offset | len | field       | encoding                                  |
//! |--------|-----|-------------|-------------------------------------------|
//! | 0      | 6   | magic       | ASCII `"scrypt"`                          |
//! | 6      | 1   | version     | 0                                         |
//! | 7      | 1   | log_n       | `log2(N)`                                 |
//! | 8      | 4   | r           | little-endian u32                         |
//! | 12     | 4   | p           | big-endian u32                            |
//! | 16     | 32  | salt        | random bytes                              |
//! | 48     | 16  | checksum    | `SHA-256(bytes[0..48])[0..16]`            |
//! | 64     | 32  | signature   | `HMAC-SHA256(scrypt_out[32..64], bytes[0..64])` |
//!
//! The differing byte orders of `r` and `p` are part of the interchange
//! format and must be written exactly as-is.

use std::ops::Range;

/// ASCII tag identifying the container format.
pub const MAGIC: &[u8; 6] = b"scrypt";

/// Format version byte written at offset 6.
pub const FORMAT_VERSION: u8 = 0;

/// Full record length.
pub const RECORD_LEN: usize = 96;

/// Length of the header (magic, version, parameters, salt).
pub const HEADER_LEN: usize = 48;

/// Length of the header plus its truncated SHA-256 checksum.
pub const CHECKSUMMED_LEN: usize = 64;

/// Salt length. Fixed; the format has no room for variable salts.
pub const SALT_LEN: usize = 32;

/// Truncated-checksum length.
pub const CHECKSUM_LEN: usize = 16;

/// HMAC-SHA256 signature length.
pub const SIGNATURE_LEN: usize = 32;

/// scrypt output length requested for every derivation.
pub const DERIVED_KEY_LEN: usize = 64;

// ─────────────────────────────────────────────────────────────────────────────
// Field positions within the record
// ─────────────────────────────────────────────────────────────────────────────
pub const MAGIC_RANGE: Range<usize> = 0..6;
pub const VERSION_OFFSET: usize = 6;
pub const LOG_N_OFFSET: usize = 7;
pub const BLOCK_SIZE_RANGE: Range<usize> = 8..12;
pub const PARALLELISM_RANGE: Range<usize> = 12..16;
pub const SALT_RANGE: Range<usize> = 16..48;
pub const CHECKSUM_RANGE: Range<usize> = 48..64;
pub const SIGNATURE_RANGE: Range<usize> = 64..96;

// ─────────────────────────────────────────────────────────────────────────────
// Split of the 64-byte scrypt output
// ─────────────────────────────────────────────────────────────────────────────

/// First half of the scrypt output. Reserved as encryption material by the
/// interchange format; unused here.
pub const ENCRYPTION_MATERIAL_RANGE: Range<usize> = 0..32;

/// Second half of the scrypt output: the HMAC key for the record signature.
pub const SIGNING_KEY_RANGE: Range<usize> = 32..64;

// ─────────────────────────────────────────────────────────────────────────────
// Recommended defaults (N = 2^15, r = 8, p = 1 — roughly 32 MiB per call)
// ─────────────────────────────────────────────────────────────────────────────
pub const DEFAULT_LOG_N: u8 = 15;
pub const DEFAULT_BLOCK_SIZE: u32 = 8;
pub const DEFAULT_PARALLELISM: u32 = 1;
