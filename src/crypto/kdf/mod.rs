// src/crypto/kdf/mod.rs

pub mod scrypt;

pub use scrypt::derive_scrypt_key;
