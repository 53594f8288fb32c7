//! Embedded example scenarios
//!
//! Runs the worked examples that double as an executable sanity check,
//! printing each lift and its verification.

use hensel_root_core::{lift_once, sqrt_mod_prime_power};
use num_bigint::BigInt;
use num_integer::Integer;

struct Scenario {
    label: &'static str,
    n: i64,
    p: i64,
    k: u32,
    r: i64,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        label: "odd prime, two lift steps",
        n: 2,
        p: 7,
        k: 3,
        r: 3,
    },
    Scenario {
        label: "odd prime, deep lift",
        n: 3,
        p: 11,
        k: 8,
        r: 5,
    },
    Scenario {
        label: "power of two, bit lifting",
        n: 17,
        p: 2,
        k: 5,
        r: 1,
    },
    Scenario {
        label: "negative value, reduced first",
        n: -5,
        p: 7,
        k: 4,
        r: 3,
    },
];

/// Run every embedded scenario verbosely. Returns false if any check fails.
pub fn run_examples() -> bool {
    println!("┌──────────────────────────────────┬──────┬────┬────┬────┬──────────────┬────────┐");
    println!("│ scenario                         │    n │  p │  k │  r │ root         │ check  │");
    println!("├──────────────────────────────────┼──────┼────┼────┼────┼──────────────┼────────┤");

    let mut all_ok = true;
    for s in SCENARIOS {
        let n = BigInt::from(s.n);
        let p = BigInt::from(s.p);
        let r = BigInt::from(s.r);
        let pk = p.pow(s.k);

        let (root_str, ok) = match sqrt_mod_prime_power(&n, &p, s.k, &r) {
            Ok(x) => {
                let ok = x.modpow(&BigInt::from(2), &pk) == n.mod_floor(&pk);
                (x.to_string(), ok)
            }
            Err(e) => (format!("error: {e}"), false),
        };
        all_ok &= ok;

        println!(
            "│ {:<32} │ {:>4} │ {:>2} │ {:>2} │ {:>2} │ {:>12} │ {:<6} │",
            s.label,
            s.n,
            s.p,
            s.k,
            s.r,
            root_str,
            if ok { "ok" } else { "FAILED" }
        );
    }
    println!("└──────────────────────────────────┴──────┴────┴────┴────┴──────────────┴────────┘");

    // Single-step lifts: the root of 16 mod 7 lifts to 39 mod 49;
    // 2 is already a root of 4 mod 49 and lifts to itself mod 343.
    println!();
    println!("Single-step lifts:");
    for &(root, p, e, expected) in &[(4i64, 7i64, 1u32, 39i64), (2, 7, 2, 2)] {
        match lift_once(&BigInt::from(root), &BigInt::from(p), e) {
            Ok(x) => {
                let ok = x == BigInt::from(expected);
                all_ok &= ok;
                println!(
                    "  lift_once({root}, {p}, {e}) = {x}  [{}]",
                    if ok { "ok" } else { "FAILED" }
                );
            }
            Err(e) => {
                all_ok = false;
                println!("  lift_once({root}, {p}) failed: {e}");
            }
        }
    }

    all_ok
}
