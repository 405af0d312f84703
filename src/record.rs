// src/record.rs

//! # Record Codec
//!
//! Deterministic mapping between `(Params, salt, checksum, signature)` and the
//! fixed 96-byte record layout (see [`crate::consts`] for the byte map).
//!
//! The write path builds the record in three append-only steps so both the
//! deriver and the verifier construct byte-identical output:
//!
//! 1. [`encode_header`] — magic, version, parameters, salt (48 bytes)
//! 2. [`append_checksum`] — truncated SHA-256 over the header (64 bytes)
//! 3. [`append_signature`] — HMAC-SHA256 over everything so far (96 bytes)
//!
//! The read path ([`decode`]) is pure slicing: it checks the length and
//! nothing else. Magic, version, and checksum are deliberately not validated
//! here — the interchange format's readers ignore them, and verification
//! compares whole records in constant time, which subsumes every field check.

use std::fmt;

use hmac::Mac;
use sha2::{Digest, Sha256};

use crate::aliases::HmacSha256;
use crate::consts::{
    BLOCK_SIZE_RANGE, CHECKSUMMED_LEN, CHECKSUM_LEN, CHECKSUM_RANGE, FORMAT_VERSION, HEADER_LEN,
    LOG_N_OFFSET, MAGIC, MAGIC_RANGE, PARALLELISM_RANGE, RECORD_LEN, SALT_LEN, SALT_RANGE,
    SIGNATURE_LEN, SIGNATURE_RANGE, VERSION_OFFSET,
};
use crate::error::ScryptKdfError;
use crate::params::Params;

/// A complete 96-byte derivation record.
///
/// Created once by `derive`, immutable thereafter, and consumed by `verify`.
/// Records are public data: they are designed to be persisted (e.g. in a
/// database column) and carry everything needed to re-check a password except
/// the password itself.
#[derive(Clone, PartialEq, Eq)]
pub struct Record([u8; RECORD_LEN]);

impl Record {
    /// The raw 96 bytes, ready for storage.
    pub const fn as_bytes(&self) -> &[u8; RECORD_LEN] {
        &self.0
    }

    /// Consumes the record, returning the raw bytes.
    pub const fn into_bytes(self) -> [u8; RECORD_LEN] {
        self.0
    }

    /// The cost parameters embedded in this record.
    pub fn params(&self) -> Params {
        split(&self.0).params
    }

    /// The salt embedded in this record.
    pub fn salt(&self) -> [u8; SALT_LEN] {
        split(&self.0).salt
    }
}

impl AsRef<[u8]> for Record {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Record {
    type Error = ScryptKdfError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; RECORD_LEN] = bytes
            .try_into()
            .map_err(|_| ScryptKdfError::InvalidRecordLength(bytes.len()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// The fields of a decoded record, extracted by pure slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedRecord {
    pub params: Params,
    pub salt: [u8; SALT_LEN],
    pub checksum: [u8; CHECKSUM_LEN],
    pub signature: [u8; SIGNATURE_LEN],
}

/// Write magic, version, parameters, and salt in record order.
///
/// `r` is little-endian, `p` is big-endian. The asymmetry is part of the wire
/// format. This function never fails; parameter validation belongs to the
/// scrypt primitive.
pub fn encode_header(params: &Params, salt: &[u8; SALT_LEN]) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    header[MAGIC_RANGE].copy_from_slice(MAGIC);
    header[VERSION_OFFSET] = FORMAT_VERSION;
    header[LOG_N_OFFSET] = params.log_n;
    header[BLOCK_SIZE_RANGE].copy_from_slice(&params.r.to_le_bytes());
    header[PARALLELISM_RANGE].copy_from_slice(&params.p.to_be_bytes());
    header[SALT_RANGE].copy_from_slice(salt);
    header
}

/// Append the first 16 bytes of `SHA-256(header)` to the 48-byte header.
///
/// The checksum catches accidental corruption only; it is not an
/// authentication check (that is the signature's job).
pub fn append_checksum(header: [u8; HEADER_LEN]) -> [u8; CHECKSUMMED_LEN] {
    let digest = Sha256::digest(header);
    let mut out = [0u8; CHECKSUMMED_LEN];
    out[..HEADER_LEN].copy_from_slice(&header);
    out[CHECKSUM_RANGE].copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

/// Append `HMAC-SHA256(signing_key, body)` to the 64-byte body, completing
/// the record.
///
/// The signing key is material derived from the password, so only someone who
/// can re-run the derivation can produce a matching signature.
pub fn append_signature(body: [u8; CHECKSUMMED_LEN], signing_key: &[u8]) -> Record {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(signing_key)
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(&body);
    let tag = mac.finalize().into_bytes();

    let mut out = [0u8; RECORD_LEN];
    out[..CHECKSUMMED_LEN].copy_from_slice(&body);
    out[SIGNATURE_RANGE].copy_from_slice(&tag);
    Record(out)
}

/// Extract parameters, salt, checksum, and signature from a stored record.
///
/// Fails only when `record` is not exactly 96 bytes. Magic, version, and
/// checksum are not validated: the reference readers of this format ignore
/// them, and a tampered field can never survive verification because the
/// whole record is compared in constant time. In particular, a non-zero
/// version byte decodes fine — rejecting it here would refuse blobs that
/// other implementations still accept.
pub fn decode(record: &[u8]) -> Result<DecodedRecord, ScryptKdfError> {
    let bytes: &[u8; RECORD_LEN] = record
        .try_into()
        .map_err(|_| ScryptKdfError::InvalidRecordLength(record.len()))?;
    Ok(split(bytes))
}

fn split(bytes: &[u8; RECORD_LEN]) -> DecodedRecord {
    let mut r = [0u8; 4];
    r.copy_from_slice(&bytes[BLOCK_SIZE_RANGE]);
    let mut p = [0u8; 4];
    p.copy_from_slice(&bytes[PARALLELISM_RANGE]);

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&bytes[SALT_RANGE]);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&bytes[CHECKSUM_RANGE]);
    let mut signature = [0u8; SIGNATURE_LEN];
    signature.copy_from_slice(&bytes[SIGNATURE_RANGE]);

    DecodedRecord {
        params: Params {
            log_n: bytes[LOG_N_OFFSET],
            r: u32::from_le_bytes(r),
            p: u32::from_be_bytes(p),
        },
        salt,
        checksum,
        signature,
    }
}
