//! Error type for the prime generation core.

use thiserror::Error;

/// Errors surfaced by the core functions.
///
/// Every failure is a precondition violation on a caller-supplied integer,
/// detected synchronously at the function boundary. The algorithms themselves
/// have no internal failure mode and never return partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimegenError {
    /// An integer argument violated its positivity or range precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
