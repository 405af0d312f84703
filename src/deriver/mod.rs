// src/deriver/mod.rs

//! High-level derivation facade.
//!
//! Core API: `derive(password, params)?` producing a fresh 96-byte record.

pub(crate) mod derive;

pub use derive::derive;
