//! # Sampler — Random Primes of an Exact Digit Length
//!
//! Draws integers uniformly from the inclusive n-digit decimal range
//! `[10^(digits−1), 10^digits − 1]` and keeps the ones that pass trial
//! division, with replacement, until the requested count is reached.
//!
//! Drawing over the whole integer range is the correctness-critical choice:
//! assembling a number digit-by-digit admits leading zeros and silently
//! produces values with fewer than `digits` digits.

use rand::Rng;

use crate::error::PrimegenError;
use crate::primality::is_prime;

/// Largest digit count whose top value `10^19 − 1` still fits in a u64.
pub const MAX_DIGITS: u64 = 19;

/// Sample `total` random primes of exactly `digits` decimal digits, using
/// the thread-local RNG. See [`sample_primes_with`] for semantics.
pub fn sample_primes(digits: u64, total: u64) -> Result<Vec<u64>, PrimegenError> {
    sample_primes_with(digits, total, &mut rand::thread_rng())
}

/// Sample `total` random primes of exactly `digits` decimal digits from the
/// supplied RNG (seed an [`rand::rngs::StdRng`] for reproducible output).
///
/// Each draw is uniform over `[10^(digits−1), 10^digits − 1]` (`[1, 9]` for
/// a single digit) and independent of previous draws, so duplicates are
/// possible and expected. Termination is probabilistic but almost sure for
/// any digit count, since the prime density of every such range is positive.
///
/// Known degenerate input: `digits == 1` offers only four primes (2, 3, 5,
/// 7), so the call still returns `total` values but they necessarily repeat
/// once `total > 4`.
///
/// # Errors
///
/// `InvalidArgument` if `digits` or `total` is zero, or if `digits` exceeds
/// [`MAX_DIGITS`].
pub fn sample_primes_with<R: Rng>(
    digits: u64,
    total: u64,
    rng: &mut R,
) -> Result<Vec<u64>, PrimegenError> {
    if digits == 0 || total == 0 {
        return Err(PrimegenError::InvalidArgument(
            "digits and total must be positive integers".into(),
        ));
    }
    if digits > MAX_DIGITS {
        return Err(PrimegenError::InvalidArgument(format!(
            "digits must be at most {} to fit in a 64-bit integer, got {}",
            MAX_DIGITS, digits
        )));
    }

    let lo = 10u64.pow(digits as u32 - 1);
    let hi = 10u64.pow(digits as u32) - 1;

    let mut results = Vec::with_capacity(total as usize);
    while (results.len() as u64) < total {
        let candidate = rng.gen_range(lo..=hi);
        if is_prime(candidate)? {
            results.push(candidate);
        }
    }
    Ok(results)
}
