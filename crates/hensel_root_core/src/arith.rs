//! Modular arithmetic helpers
//!
//! Small building blocks for the lifting algorithm: extended Euclid,
//! modular inverse, and squaring modulo a given modulus.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Extended Euclidean algorithm
///
/// Returns `(g, x, y)` with `g = gcd(a, b)` and `a*x + b*y = g`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        (a.clone(), BigInt::one(), BigInt::zero())
    } else {
        let (g, x, y) = extended_gcd(b, &(a % b));
        (g, y.clone(), x - (a / b) * y)
    }
}

/// Modular inverse using the extended Euclidean algorithm
///
/// Returns the unique `y` in `[0, m)` with `a*y ≡ 1 (mod m)`, or `None`
/// when `gcd(a, m) != 1` and no inverse exists.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Option<BigInt> {
    let (g, x, _) = extended_gcd(a, m);
    if g != BigInt::one() {
        return None;
    }
    Some(x.mod_floor(m))
}

/// Compute `x^2 mod m`, reduced into `[0, m)`
pub fn square_mod(x: &BigInt, m: &BigInt) -> BigInt {
    x.modpow(&BigInt::from(2u32), m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_inverse() {
        let inv = mod_inverse(&BigInt::from(7), &BigInt::from(11)).unwrap();
        assert_eq!((inv * 7) % 11, BigInt::one());
    }

    #[test]
    fn test_mod_inverse_negative_input() {
        // -4 ≡ 7 (mod 11), so the inverse matches inv(7, 11)
        let inv = mod_inverse(&BigInt::from(-4), &BigInt::from(11)).unwrap();
        assert_eq!((inv * 7) % 11, BigInt::one());
    }

    #[test]
    fn test_mod_inverse_none_when_not_coprime() {
        assert!(mod_inverse(&BigInt::from(6), &BigInt::from(9)).is_none());
        assert!(mod_inverse(&BigInt::from(4), &BigInt::from(2)).is_none());
    }

    #[test]
    fn test_extended_gcd_bezout() {
        let a = BigInt::from(240);
        let b = BigInt::from(46);
        let (g, x, y) = extended_gcd(&a, &b);
        assert_eq!(g, BigInt::from(2));
        assert_eq!(&a * x + &b * y, g);
    }

    #[test]
    fn test_square_mod_reduces() {
        assert_eq!(
            square_mod(&BigInt::from(-3), &BigInt::from(7)),
            BigInt::from(2)
        );
    }
}
