use thiserror::Error;

/// Errors raised when building a [PrimeCache][crate::PrimeCache] with an explicit limit.
///
/// The number theoretic functions themselves never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The cache must hold at least the primes 2 and 3, otherwise the 6k±1 trial division
    /// in the primality test would skip the divisor 3.
    #[error("prime cache limit {limit} is too small, the minimum is {min}")]
    CacheLimitTooSmall { limit: u64, min: u64 },

    #[error("prime cache limit {limit} is too large, the maximum is {max}")]
    CacheLimitTooLarge { limit: u64, max: u64 },
}
