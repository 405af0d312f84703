//! tests/record_format_tests.rs
//! Byte-exact layout of the 96-byte container.

use sha2::{Digest, Sha256};

use scrypt_kdf_rs::consts::{CHECKSUM_RANGE, HEADER_LEN, RECORD_LEN, SALT_LEN};
use scrypt_kdf_rs::record::{append_checksum, append_signature, decode, encode_header};
use scrypt_kdf_rs::{derive, Params, Record, ScryptKdfError};

const TEST_PARAMS: Params = Params::new(10, 8, 1);

#[test]
fn derived_record_starts_with_the_fixed_prefix() {
    let record = derive(b"prefix-check", Params::new(10, 8, 1)).unwrap();
    let bytes = record.as_bytes();

    // "scrypt" | version 0 | log_n 10 | r = 8 little-endian | p = 1 big-endian
    let expected_prefix = [
        b's', b'c', b'r', b'y', b'p', b't', 0x00, 0x0a, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x01,
    ];
    assert_eq!(&bytes[..16], &expected_prefix);
}

#[test]
fn stored_checksum_is_truncated_sha256_of_the_header() {
    let record = derive(b"checksum-check", TEST_PARAMS).unwrap();
    let bytes = record.as_bytes();

    let digest = Sha256::digest(&bytes[..HEADER_LEN]);
    assert_eq!(&bytes[CHECKSUM_RANGE], &digest[..16]);
}

#[test]
fn header_salt_lands_at_offset_16() {
    let salt = {
        let mut salt = [0u8; SALT_LEN];
        for (i, byte) in salt.iter_mut().enumerate() {
            *byte = i as u8;
        }
        salt
    };

    let header = encode_header(&TEST_PARAMS, &salt);
    assert_eq!(&header[16..48], &salt);
}

#[test]
fn decode_extracts_fields_with_their_wire_byte_orders() {
    // r and p chosen so a byte-order mixup cannot go unnoticed
    let params = Params::new(11, 0x0102_0304, 0x0506_0708);
    let salt = [0xabu8; SALT_LEN];
    let record = append_signature(append_checksum(encode_header(&params, &salt)), b"key");

    let decoded = decode(record.as_bytes()).unwrap();
    assert_eq!(decoded.params.log_n, 11);
    assert_eq!(decoded.params.r, 0x0102_0304);
    assert_eq!(decoded.params.p, 0x0506_0708);
    assert_eq!(decoded.salt, salt);
}

#[test]
fn record_try_from_checks_length() {
    let record = derive(b"try-from", TEST_PARAMS).unwrap();

    let ok = Record::try_from(record.as_bytes().as_slice()).unwrap();
    assert_eq!(ok.as_bytes(), record.as_bytes());

    let err = Record::try_from(&record.as_bytes()[..40]).unwrap_err();
    assert!(matches!(err, ScryptKdfError::InvalidRecordLength(40)));
}

#[test]
fn record_accessors_match_decode() {
    let record = derive(b"accessors", TEST_PARAMS).unwrap();
    let decoded = decode(record.as_bytes()).unwrap();

    assert_eq!(record.params(), decoded.params);
    assert_eq!(record.salt(), decoded.salt);
}

#[test]
fn record_debug_prints_hex_not_raw_bytes() {
    let record = derive(b"debug", TEST_PARAMS).unwrap();
    let rendered = format!("{record:?}");

    assert!(rendered.starts_with("Record("));
    assert_eq!(rendered.len(), "Record(".len() + RECORD_LEN * 2 + 1);
}
