pub mod error;
pub mod primality;
pub mod sampler;
pub mod sieve;

pub use error::PrimegenError;
pub use primality::is_prime;
pub use sampler::{sample_primes, sample_primes_with, MAX_DIGITS};
pub use sieve::sieve_range;
