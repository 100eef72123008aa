//! # Sieve — Prime Generation over a Bounded Range
//!
//! Computes every prime in `[1, limit]` with the Sieve of Atkin. Instead of
//! crossing off multiples like Eratosthenes, Atkin flips a per-candidate flag
//! once for each solution of three binary quadratic forms, restricted by the
//! candidate's residue class modulo 60:
//!
//! 1. `n = 4x² + y²` with `y` odd, for `n mod 60 ∈ {1,13,17,29,37,41,49,53}`
//! 2. `n = 3x² + y²` with `x` odd and `y` even, for `n mod 60 ∈ {7,19,31,43}`
//! 3. `n = 3x² − y²` with `x > y` and `y ≡ x − 1 (mod 2)`, for
//!    `n mod 60 ∈ {11,23,47,59}`
//!
//! A candidate survives only when its representation count is odd, so the
//! flag must be *toggled* per solution, never merely set. Candidates with an
//! odd count are prime unless divisible by a square; a final pass clears
//! every multiple of each surviving candidate's square.
//!
//! 2, 3, and 5 divide 60 and are invisible to the residue classes above, so
//! they are seeded directly — but only when they do not exceed `limit`.
//!
//! Complexity: O(limit) space for the flag table; the marking loops are
//! bounded by `x² ≤ limit` and `y² ≤ limit`, giving O(limit) total marking
//! work plus the squarefree pass.
//!
//! ## References
//!
//! - A. O. L. Atkin, D. J. Bernstein, "Prime Sieves Using Binary Quadratic
//!   Forms", Mathematics of Computation, 73(246):1023–1030, 2004.
//! - <https://en.wikipedia.org/wiki/Sieve_of_Atkin>

use crate::error::PrimegenError;

/// Residues mod 60 admissible for `n = 4x² + y²` (n ≡ 1 mod 4).
const RESIDUES_4XX_YY: [u64; 8] = [1, 13, 17, 29, 37, 41, 49, 53];

/// Residues mod 60 admissible for `n = 3x² + y²` (n ≡ 7 mod 12).
const RESIDUES_3XX_YY: [u64; 4] = [7, 19, 31, 43];

/// Residues mod 60 admissible for `n = 3x² − y²` (n ≡ 11 mod 12).
const RESIDUES_3XX_MINUS_YY: [u64; 4] = [11, 23, 47, 59];

/// Generate all primes in `[1, limit]`, ascending, via the Sieve of Atkin.
///
/// `sieve_range(1)` returns an empty Vec; there are no primes below 2. The
/// result is owned by the caller and never mutated afterwards; the flag
/// table is dropped before returning.
///
/// # Errors
///
/// `InvalidArgument` if `limit` is zero.
pub fn sieve_range(limit: u64) -> Result<Vec<u64>, PrimegenError> {
    if limit == 0 {
        return Err(PrimegenError::InvalidArgument(
            "limit must be a positive integer".into(),
        ));
    }

    // Base primes, seeded only when within the limit. The table scan below
    // cannot re-add them: the quadratic forms only admit n coprime to 60.
    let mut primes: Vec<u64> = [2, 3, 5].iter().copied().filter(|&p| p <= limit).collect();
    if limit < 7 {
        return Ok(primes);
    }

    // One flag per value in [1, limit]. The flag for value v lives at index
    // v - 1; every access below goes through flip/clear to keep that offset
    // in exactly one place.
    let mut flags = vec![false; limit as usize];

    let mut x: u64 = 1;
    while x * x <= limit {
        let mut y: u64 = 1;
        while y * y <= limit {
            let n = 4 * x * x + y * y;
            if n <= limit && y % 2 == 1 && RESIDUES_4XX_YY.contains(&(n % 60)) {
                flip(&mut flags, n);
            }

            let n = 3 * x * x + y * y;
            if n <= limit && x % 2 == 1 && y % 2 == 0 && RESIDUES_3XX_YY.contains(&(n % 60)) {
                flip(&mut flags, n);
            }

            // The parity condition is deliberately written as y ≡ x − 1:
            // x and y must have opposite parity for this form.
            if x > y {
                let n = 3 * x * x - y * y;
                if n <= limit && y % 2 == (x - 1) % 2 && RESIDUES_3XX_MINUS_YY.contains(&(n % 60)) {
                    flip(&mut flags, n);
                }
            }

            y += 1;
        }
        x += 1;
    }

    // Squarefree elimination: the quadratic forms admit composites divisible
    // by a perfect square (e.g. 169 = 13²). Scan surviving values ascending
    // and clear every multiple of their squares, including limit itself.
    let mut v: u64 = 1;
    while v * v <= limit {
        if flags[(v - 1) as usize] {
            let power = v * v;
            let mut m = power;
            while m <= limit {
                flags[(m - 1) as usize] = false;
                m += power;
            }
        }
        v += 1;
    }

    primes.reserve(prime_count_estimate(limit));
    for (idx, &flagged) in flags.iter().enumerate() {
        if flagged {
            primes.push(idx as u64 + 1);
        }
    }
    Ok(primes)
}

/// Toggle the flag for value `n` (stored at index `n - 1`).
#[inline]
fn flip(flags: &mut [bool], n: u64) {
    let idx = (n - 1) as usize;
    flags[idx] = !flags[idx];
}

/// Estimate of pi(n) for pre-sizing the output, slightly padded.
fn prime_count_estimate(limit: u64) -> usize {
    if limit < 10 {
        return 4;
    }
    let nf = limit as f64;
    (1.3 * nf / nf.ln()) as usize
}
