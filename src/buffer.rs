//! PrimeCache implements a list of primes, built once by the sieve of Eratosthenes

use crate::error::Error;
use crate::nt_funcs::estimate_prime_count;
use crate::traits::{PrimeBuffer, PrimeCount};
use bitvec::bitvec;
use std::convert::TryFrom;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Primes up to this value are held by the process-wide cache. It is the threshold between
/// the lookup and the trial division in [is_prime()][crate::is_prime], and between the exact
/// count and the estimate in [prime_count()][crate::prime_count].
pub const DEFAULT_CACHE_LIMIT: u64 = 10_000;

/// 2 and 3 have to be cached, the trial division beyond the cache only tries 6k±1 divisors
pub const MIN_CACHE_LIMIT: u64 = 3;

pub const MAX_CACHE_LIMIT: u64 = u32::MAX as u64;

/// Returns all primes **less than or equal to** n, sorted in ascending order.
/// An empty list is returned if n is smaller than 2.
///
/// The sieve of Eratosthenes is applied on odd numbers only, and for each prime p the
/// multiples are crossed off starting from p*p. It stops as soon as p exceeds sqrt(n),
/// since every composite under n has a prime factor no larger than sqrt(n).
/// The sieve takes O(n) memory (one bit per odd number) and O(n log log n) time.
///
/// Reference: <https://en.wikipedia.org/wiki/Sieve_of_Eratosthenes>
pub fn sieve(n: i64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }
    if n == 2 {
        return vec![2];
    }

    // composite[i] is set iff 2i+3 is not a prime
    let n = n as u64;
    let length = ((n - 3) / 2 + 1) as usize;
    let mut composite = bitvec![0; length];

    let sqrtn = num_integer::sqrt(n);
    for (i, p) in (3..=sqrtn).step_by(2).enumerate() {
        if composite[i] {
            continue;
        }
        for j in (((p * p - 3) / 2) as usize..length).step_by(p as usize) {
            composite.set(j, true);
        }
    }

    // the estimate only sizes the allocation
    let capacity = usize::try_from(estimate_prime_count(n)).unwrap_or(0);
    let mut primes = Vec::with_capacity(capacity);
    primes.push(2);
    primes.extend(composite.iter_zeros().map(|i| (i as u64) * 2 + 3));
    primes
}

/// Number theoretic functions backed by a [PrimeBuffer]
pub trait PrimeBufferExt: for<'a> PrimeBuffer<'a> {
    /// Return whether target is a prime. Targets within the buffer are looked up, others are
    /// tested by trial division, first with the buffered primes, then with the numbers of the
    /// form 6k±1 beyond the buffer, up to ceil(sqrt(target)).
    ///
    /// Reference: <https://en.wikipedia.org/wiki/Trial_division>
    fn is_prime(&self, target: i64) -> bool {
        let bound = self.bound();
        if target <= i64::try_from(bound).unwrap_or(i64::MAX) {
            return target >= 2 && self.contains(target as u64);
        }

        let target = target as u64;
        let root = num_integer::sqrt(target);
        let max = if root * root < target { root + 1 } else { root };

        for &p in self.iter() {
            if p > max {
                return true;
            }
            if target % p == 0 {
                return false;
            }
        }

        trace!(n = target, bound, "buffered primes exhausted, continue with 6k±1 divisors");
        // the first pair (6k-1, 6k+1) with 6k+1 beyond the bound
        let mut d = (bound.saturating_sub(1) / 6 + 1) * 6 - 1;
        while d <= max {
            if target % d == 0 || target % (d + 2) == 0 {
                return false;
            }
            d += 6;
        }
        true
    }

    /// Return the number of primes less than or equal to target. The count is exact if the
    /// target is within the buffer, otherwise it's estimated by [estimate_prime_count()].
    fn prime_count(&self, target: i64) -> PrimeCount {
        if target < 2 {
            return PrimeCount::Exact(0);
        }
        let target = target as u64;
        if target > self.bound() {
            trace!(n = target, bound = self.bound(), "estimating prime count");
            return PrimeCount::Estimate(estimate_prime_count(target));
        }

        let count = match self.position(target) {
            Ok(i) => i + 1, // target is the i-th prime
            Err(i) => i,
        };
        PrimeCount::Exact(count as u64)
    }
}

impl<T> PrimeBufferExt for T where for<'a> T: PrimeBuffer<'a> {}

/// An immutable list of all primes up to a limit.
///
/// The free functions of this crate share [PrimeCache::global()], which is built on first use
/// and never changes afterwards. Build another instance with [PrimeCache::with_limit()] to
/// move the lookup threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeCache {
    list: Vec<u64>, // sorted primes not exceeding limit
    limit: u64,
}

impl PrimeCache {
    /// Cache the primes up to [DEFAULT_CACHE_LIMIT]
    #[inline]
    pub fn new() -> Self {
        Self::build(DEFAULT_CACHE_LIMIT)
    }

    /// Cache the primes up to limit, which must be within [MIN_CACHE_LIMIT] and [MAX_CACHE_LIMIT]
    pub fn with_limit(limit: u64) -> Result<Self, Error> {
        if limit < MIN_CACHE_LIMIT {
            return Err(Error::CacheLimitTooSmall {
                limit,
                min: MIN_CACHE_LIMIT,
            });
        }
        if limit > MAX_CACHE_LIMIT {
            return Err(Error::CacheLimitTooLarge {
                limit,
                max: MAX_CACHE_LIMIT,
            });
        }
        Ok(Self::build(limit))
    }

    fn build(limit: u64) -> Self {
        let list = sieve(limit as i64);
        debug!(
            limit,
            primes = list.len(),
            largest = ?list.last(),
            "built prime cache"
        );
        PrimeCache { list, limit }
    }

    /// The cache shared by [is_prime()][crate::is_prime] and [prime_count()][crate::prime_count]
    pub fn global() -> &'static PrimeCache {
        static GLOBAL: OnceLock<PrimeCache> = OnceLock::new();
        GLOBAL.get_or_init(PrimeCache::new)
    }

    #[inline]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    #[inline]
    pub fn primes(&self) -> &[u64] {
        &self.list
    }
}

impl Default for PrimeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PrimeBuffer<'a> for PrimeCache {
    type PrimeIter = std::slice::Iter<'a, u64>;

    fn iter(&'a self) -> Self::PrimeIter {
        self.list.iter()
    }

    fn position(&self, num: u64) -> Result<usize, usize> {
        self.list.binary_search(&num)
    }

    fn bound(&self) -> u64 {
        self.limit
    }
}
