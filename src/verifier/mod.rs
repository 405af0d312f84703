// src/verifier/mod.rs

//! High-level verification facade.
//!
//! Core API: `verify(record, attempt)?` testing an attempted password against
//! a stored record.

pub(crate) mod verify;

pub use verify::verify;
