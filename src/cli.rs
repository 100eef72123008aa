//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Each mode calls a
//! pure core function, logs timing, and formats the result for stdout.

use std::time::Instant;

use anyhow::Result;
use tracing::info;

use primegen::{sample_primes, sieve_range};

/// Range mode: print every prime in `[1, limit]` as a bracketed list, or a
/// "No prime numbers" notice when the range below 2 is empty of primes.
pub fn run_range(limit: u64) -> Result<()> {
    let started = Instant::now();
    let primes = sieve_range(limit)?;
    info!(
        limit,
        count = primes.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "range sieve finished"
    );

    if primes.is_empty() {
        println!("No prime numbers");
    } else {
        println!("{:?}", primes);
    }
    Ok(())
}

/// Digit mode: print `total` random primes of exactly `digits` digits.
pub fn run_digits(digits: u64, total: u64) -> Result<()> {
    let started = Instant::now();
    let primes = sample_primes(digits, total)?;
    info!(
        digits,
        total,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "digit sampling finished"
    );

    println!("{:?}", primes);
    Ok(())
}
