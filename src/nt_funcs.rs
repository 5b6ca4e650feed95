//! Number theoretic functions on native integers, backed by the process-wide prime cache

use crate::buffer::{PrimeBufferExt, PrimeCache};
use crate::traits::PrimeCount;
use num_traits::ToPrimitive;

/// Test if target is a prime. Targets up to [DEFAULT_CACHE_LIMIT][crate::DEFAULT_CACHE_LIMIT]
/// are looked up in the cache, larger ones are tested by trial division, see
/// [PrimeBufferExt::is_prime()]. Numbers smaller than 2 are never prime.
///
/// The trial division is slow for targets close to `i64::MAX`, this function is meant for
/// numbers up to a few billions.
#[inline]
pub fn is_prime(target: i64) -> bool {
    PrimeCache::global().is_prime(target)
}

/// Count the primes less than or equal to target. The count is exact for targets up to
/// [DEFAULT_CACHE_LIMIT][crate::DEFAULT_CACHE_LIMIT], and estimated by [estimate_prime_count()]
/// otherwise, so check [PrimeCount::is_exact()] before trusting the value.
#[inline]
pub fn prime_count(target: i64) -> PrimeCount {
    PrimeCache::global().prime_count(target)
}

/// Estimate the prime counting function pi(n) by n / (ln(n) - 1), derived from the prime
/// number theorem. The relative error stays below 1% for 10^4 < n <= 10^9, nothing is
/// claimed beyond that range.
///
/// Reference: <https://en.wikipedia.org/wiki/Prime-counting_function>
pub fn estimate_prime_count(n: u64) -> u64 {
    match n {
        0 | 1 => 0,
        2 => 1,
        _ => {
            let x = n as f64;
            (x / (x.ln() - 1.)).to_u64().unwrap_or(u64::MAX)
        }
    }
}

/// Greatest common divisor by the Euclidean algorithm. The signs of the operands are
/// dropped, so the result is never negative, and gcd(0, 0) = 0.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Test if the only positive integer dividing both a and b is 1, i.e. gcd(a, b) == 1.
/// Negative operands are treated as their absolute values.
///
/// Reference: <https://en.wikipedia.org/wiki/Coprime_integers>
#[inline]
pub fn coprime(a: i64, b: i64) -> bool {
    gcd(a, b) == 1
}
