//! This crate provides a few simple functions on prime numbers of native integer size:
//! [sieve()] lists the primes up to a limit, [is_prime()] tests primality, [coprime()] tests
//! coprimality and [prime_count()] counts (or estimates) the primes up to a limit.
//!
//! The algorithms are meant for primes up to a few billions. They are not suitable for
//! cryptography or for any work on really large primes.
//!
//! ```
//! use small_primes::{coprime, is_prime, prime_count, sieve, PrimeCount};
//!
//! assert_eq!(sieve(20), [2, 3, 5, 7, 11, 13, 17, 19]);
//! assert!(is_prime(1000003) && !is_prime(10007 * 10009));
//! assert!(coprime(4, 5) && !coprime(4, 6));
//! assert_eq!(prime_count(23), PrimeCount::Exact(9));
//! assert_eq!(prime_count(12345), PrimeCount::Estimate(1465));
//! ```
//!
//! The primality test and the prime counting share a process-wide [PrimeCache] holding the
//! primes up to [DEFAULT_CACHE_LIMIT]. A cache with another limit can be built and queried
//! through [PrimeBufferExt]:
//!
//! ```
//! use small_primes::{PrimeBufferExt, PrimeCache};
//!
//! let cache = PrimeCache::with_limit(100_000).unwrap();
//! assert!(cache.prime_count(99_991).is_exact());
//! assert!(cache.is_prime(99_991));
//! ```

mod buffer;
mod error;
pub mod nt_funcs;
mod traits;

pub use buffer::{
    sieve, PrimeBufferExt, PrimeCache, DEFAULT_CACHE_LIMIT, MAX_CACHE_LIMIT, MIN_CACHE_LIMIT,
};
pub use error::Error;
pub use nt_funcs::{coprime, is_prime, prime_count};
pub use traits::{PrimeBuffer, PrimeCount};
