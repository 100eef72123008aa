//! Deterministic primality testing by trial division.

use crate::error::PrimegenError;

/// Deterministic primality test by trial division.
///
/// Tests divisibility by every integer `i` starting at 2 while `i * i <= n`.
/// Any exact division means composite; exhausting the loop means prime. The
/// loop body never executes for 2 or 3 (`2 * 2 > 3`), which classifies both
/// as prime by vacuity. 1 is not prime.
///
/// The comparison uses u128 intermediates so `i * i` cannot overflow near
/// the top of the u64 range.
///
/// # Errors
///
/// `InvalidArgument` if `n` is zero.
pub fn is_prime(n: u64) -> Result<bool, PrimegenError> {
    if n == 0 {
        return Err(PrimegenError::InvalidArgument(
            "n must be a positive integer".into(),
        ));
    }
    if n == 1 {
        return Ok(false);
    }
    let mut i: u64 = 2;
    while (i as u128) * (i as u128) <= n as u128 {
        if n % i == 0 {
            return Ok(false);
        }
        i += 1;
    }
    Ok(true)
}
