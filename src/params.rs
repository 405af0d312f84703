// src/params.rs

//! Cost parameters for the scrypt derivation.

use crate::consts::{DEFAULT_BLOCK_SIZE, DEFAULT_LOG_N, DEFAULT_PARALLELISM};

/// Scrypt cost parameters carried inside every record.
///
/// Immutable once created. Validation happens at derivation time, when the
/// scrypt primitive checks the `(N, r, p)` combination against its internal
/// limits; `Params` itself is a plain value and never fails to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// CPU/memory cost as `log2(N)`. The primitive requires `log_n < 64`.
    pub log_n: u8,
    /// Block size (`r`). Must be positive.
    pub r: u32,
    /// Parallelization (`p`). Must be positive.
    pub p: u32,
}

impl Params {
    /// Recommended defaults: `N = 2^15`, `r = 8`, `p = 1`.
    pub const DEFAULT: Self = Self {
        log_n: DEFAULT_LOG_N,
        r: DEFAULT_BLOCK_SIZE,
        p: DEFAULT_PARALLELISM,
    };

    pub const fn new(log_n: u8, r: u32, p: u32) -> Self {
        Self { log_n, r, p }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DERIVED_KEY_LEN;

    #[test]
    fn default_params_are_accepted_by_the_primitive() {
        scrypt::Params::new(
            Params::DEFAULT.log_n,
            Params::DEFAULT.r,
            Params::DEFAULT.p,
            DERIVED_KEY_LEN,
        )
        .expect("default parameters must be valid scrypt parameters");
    }

    #[test]
    fn default_matches_documented_values() {
        let params = Params::default();
        assert_eq!(params.log_n, 15);
        assert_eq!(params.r, 8);
        assert_eq!(params.p, 1);
    }
}
