//! Hensel Root CLI
//!
//! Square roots modulo prime powers via Hensel lifting.
//!
//! # Usage
//! ```bash
//! # Lift the seed root 3 of 2 mod 7 to a root mod 7^3
//! hensel-root lift --n 2 --p 7 --k 3 --r 3
//!
//! # Run the embedded example scenarios verbosely
//! hensel-root examples
//! ```

mod scenarios;

use clap::{Parser, Subcommand};
use hensel_root_core::sqrt_mod_prime_power;
use num_bigint::BigInt;
use num_integer::Integer;

#[derive(Parser)]
#[command(name = "hensel-root")]
#[command(about = "Square roots modulo prime powers via Hensel lifting")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lift a seed root mod p to a square root mod p^k
    Lift {
        /// Value whose square root is sought
        #[arg(long)]
        n: String,

        /// Prime modulus base (primality is not verified)
        #[arg(long)]
        p: String,

        /// Lift exponent; the target modulus is p^k
        #[arg(long, default_value = "1")]
        k: u32,

        /// Seed root modulo p (modulo 8 when p = 2)
        #[arg(long)]
        r: String,
    },

    /// Run the embedded example scenarios verbosely
    Examples,
}

fn parse_bigint(name: &str, s: &str) -> BigInt {
    match s.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Error: {name} must be a decimal integer, got '{s}'");
            std::process::exit(2);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lift { n, p, k, r } => {
            let n = parse_bigint("n", &n);
            let p = parse_bigint("p", &p);
            let r = parse_bigint("r", &r);

            match sqrt_mod_prime_power(&n, &p, k, &r) {
                Ok(x) => {
                    let pk = p.pow(k);
                    println!("modulus  = {p}^{k} = {pk}");
                    println!("root     = {x}");
                    println!(
                        "verify   = root^2 ≡ {} (mod {pk})",
                        x.modpow(&BigInt::from(2), &pk)
                    );
                    debug_assert_eq!(x.modpow(&BigInt::from(2), &pk), n.mod_floor(&pk));
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Examples => {
            if !scenarios::run_examples() {
                std::process::exit(1);
            }
        }
    }
}
