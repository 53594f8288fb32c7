//! Hensel Root Core Library
//!
//! Square roots modulo prime powers via Hensel lifting.
//!
//! # Overview
//!
//! Given `n`, a prime `p`, an exponent `k`, and a seed root `r` with
//! `r^2 ≡ n (mod p)`, [`sqrt_mod_prime_power`] lifts the seed through
//! `p^2, p^3, ..., p^k` and returns `x` with `x^2 ≡ n (mod p^k)`, reduced
//! into `[0, p^k)`. [`lift_once`] exposes a single lifting step.
//!
//! Everything is pure arbitrary-precision arithmetic over
//! [`num_bigint::BigInt`]: no state, no I/O, calls are independent.
//!
//! # Key Components
//!
//! - [`lift`] - the lifting algorithm (odd primes, and the bit-by-bit rule
//!   for powers of two)
//! - [`arith`] - modular arithmetic helpers (extended Euclid, modular inverse)
//! - [`error`] - error taxonomy for invalid inputs

pub mod arith;
pub mod error;
pub mod lift;

pub use arith::{extended_gcd, mod_inverse};
pub use error::{LiftError, Result};
pub use lift::{lift_once, sqrt_mod_prime_power};
