//! Error types for prime-power square-root lifting

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiftError {
    #[error("exponent must be at least 1, got {k}")]
    InvalidExponent { k: u32 },

    #[error("modulus base must be 2 or an odd integer >= 3, got {p}")]
    InvalidPrime { p: BigInt },

    #[error("{p} divides the value; only the unit (simple-root) case is supported")]
    NonUnit { p: BigInt },

    #[error("seed root {seed} does not square to the value modulo {modulus}")]
    InvalidSeed { seed: BigInt, modulus: BigInt },
}

pub type Result<T> = std::result::Result<T, LiftError>;
