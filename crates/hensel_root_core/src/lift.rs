//! Hensel lifting of square roots to prime-power moduli
//!
//! Given `n`, a prime `p`, an exponent `k`, and a seed root `r` with
//! `r^2 ≡ n (mod p)`, produce `x` with `x^2 ≡ n (mod p^k)`.
//!
//! For odd primes this is Newton lifting: at each step the defect
//! `d = (n - x^2) / p^i` is corrected by `t = d * (2x)^(-1) mod p`, and
//! `x + t * p^i` satisfies the congruence one power higher. The derivative
//! `2x` stays invertible because `x` is a unit mod `p` (the simple-root
//! condition of Hensel's lemma).
//!
//! The prime 2 needs its own rule: `2x` is never invertible mod 2, and odd
//! squares are always `1 (mod 8)`. Roots mod 2, 4, 8 are resolved directly,
//! and for larger powers the root is extended one bit at a time.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::arith::{mod_inverse, square_mod};
use crate::error::{LiftError, Result};

/// Compute a square root of `n` modulo `p^k` by Hensel lifting.
///
/// `seed` must satisfy `seed^2 ≡ n (mod p)` (modulo `2^min(k,3)` when
/// `p = 2`); the base congruence is checked before lifting and an invalid
/// seed is rejected rather than lifted into a wrong answer. `n` must be a
/// unit mod `p`; the non-unit case (roots of multiplicity > 1) is
/// unsupported. Primality of `p` is the caller's responsibility, though
/// `p < 2` and even `p > 2` are rejected outright.
///
/// The result is canonically reduced into `[0, p^k)`.
pub fn sqrt_mod_prime_power(n: &BigInt, p: &BigInt, k: u32, seed: &BigInt) -> Result<BigInt> {
    validate_prime(p)?;
    if k < 1 {
        return Err(LiftError::InvalidExponent { k });
    }

    let target = p.pow(k);
    let n_red = n.mod_floor(&target);

    if n_red.mod_floor(p).is_zero() {
        return Err(LiftError::NonUnit { p: p.clone() });
    }

    // Base congruence check: mod p for odd primes, mod 2^min(k,3) for p = 2
    // (squares mod 8 are the finest class that determines liftability).
    let two = BigInt::from(2);
    let base = if *p == two {
        two.pow(k.min(3))
    } else {
        p.clone()
    };
    let seed_base = seed.mod_floor(&base);
    if square_mod(&seed_base, &base) != n_red.mod_floor(&base) {
        return Err(LiftError::InvalidSeed {
            seed: seed.clone(),
            modulus: base,
        });
    }

    let x = if *p == two {
        lift_pow2(&n_red, k, seed)
    } else {
        lift_odd(&n_red, p, k, seed)?
    };
    Ok(x.mod_floor(&target))
}

/// Newton lifting for an odd prime.
///
/// Invariant: entering step `i`, `x^2 ≡ n (mod p^i)`.
fn lift_odd(n: &BigInt, p: &BigInt, k: u32, seed: &BigInt) -> Result<BigInt> {
    let mut x = seed.mod_floor(p);

    // x ≡ seed (mod p) at every step, so the derivative inverse is constant.
    let inv_2x = mod_inverse(&(BigInt::from(2) * &x), p)
        .ok_or_else(|| LiftError::NonUnit { p: p.clone() })?;

    let mut modulus = p.clone(); // p^i
    for _ in 1..k {
        // Exact by the invariant.
        let defect = (n - &x * &x) / &modulus;
        let t = (&defect * &inv_2x).mod_floor(p);
        x += t * &modulus;
        modulus *= p;
    }
    Ok(x)
}

/// Bit-by-bit lifting for powers of two.
///
/// For `k <= 3` the seed already is the root: every odd residue squares to
/// 1 mod 8, so the seed reduced mod `2^k` satisfies the congruence checked
/// by the caller. For `k >= 4`, with `x^2 ≡ n (mod 2^i)` and `i >= 3`,
/// exactly one of `x` and `x + 2^(i-1)` satisfies the congruence mod
/// `2^(i+1)` (their squares differ by `2^i` there, since `x` is odd).
fn lift_pow2(n: &BigInt, k: u32, seed: &BigInt) -> BigInt {
    let two = BigInt::from(2);
    if k <= 3 {
        return seed.mod_floor(&two.pow(k));
    }

    let mut x = seed.mod_floor(&BigInt::from(8));
    let mut modulus = BigInt::from(8); // 2^i
    for _ in 3..k {
        let next = &modulus * &two;
        if square_mod(&x, &next) != n.mod_floor(&next) {
            x += &modulus / &two;
        }
        modulus = next;
    }
    x
}

/// Lift a square root one step, from modulus `p^exponent` to
/// `p^(exponent + 1)`.
///
/// The value being rooted is the least nonnegative residue of
/// `root^2` modulo `p^exponent`; the returned `x` satisfies
/// `x^2 ≡ root^2 mod p^exponent (mod p^(exponent + 1))`. `root` must be a
/// unit mod `p`.
pub fn lift_once(root: &BigInt, p: &BigInt, exponent: u32) -> Result<BigInt> {
    validate_prime(p)?;
    if exponent < 1 {
        return Err(LiftError::InvalidExponent { k: exponent });
    }
    if root.mod_floor(p).is_zero() {
        return Err(LiftError::NonUnit { p: p.clone() });
    }

    let pe = p.pow(exponent);
    let next = &pe * p;
    let square = square_mod(root, &pe);

    if *p == BigInt::from(2) {
        return Ok(match exponent {
            // The only odd residue mod 2 squares to 1, whose root mod 4 is 1.
            1 => BigInt::one(),
            // root^2 mod 4 = 1 for odd root, and every odd residue mod 8
            // squares to 1 mod 8.
            2 => root.mod_floor(&BigInt::from(4)),
            _ => {
                let x = root.mod_floor(&pe);
                if square_mod(&x, &next) == square {
                    x
                } else {
                    x + &pe / 2
                }
            }
        });
    }

    // One Newton step against the reduced square.
    let defect = (&square - root * root) / &pe;
    let inv_2x = mod_inverse(&(BigInt::from(2) * root), p)
        .ok_or_else(|| LiftError::NonUnit { p: p.clone() })?;
    let t = (&defect * &inv_2x).mod_floor(p);
    Ok((root + t * &pe).mod_floor(&next))
}

fn validate_prime(p: &BigInt) -> Result<()> {
    let two = BigInt::from(2);
    if *p < two || (p.is_even() && *p != two) {
        return Err(LiftError::InvalidPrime { p: p.clone() });
    }
    Ok(())
}
