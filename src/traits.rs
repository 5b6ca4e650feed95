/// Result of counting the primes not exceeding a number.
///
/// Only [PrimeCount::Exact] is authoritative; an estimate merely looks precise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeCount {
    Exact(u64),
    /// carrying the prime number theorem estimate n / (ln(n) - 1)
    Estimate(u64),
}

impl PrimeCount {
    /// The counted (or estimated) number of primes
    #[inline]
    pub fn value(&self) -> u64 {
        match self {
            PrimeCount::Exact(v) | PrimeCount::Estimate(v) => *v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, PrimeCount::Exact(_))
    }
}

impl From<PrimeCount> for (u64, bool) {
    fn from(count: PrimeCount) -> Self {
        (count.value(), count.is_exact())
    }
}

/// A prime buffer is an ascending list of all primes up to its [bound()][PrimeBuffer::bound].
/// The bound itself doesn't have to be a prime, but it must be at least 3.
/// Lookups beyond the bound are the business of [PrimeBufferExt][crate::PrimeBufferExt].
pub trait PrimeBuffer<'a> {
    type PrimeIter: Iterator<Item = &'a u64>;

    /// Iterate the stored primes in ascending order
    fn iter(&'a self) -> Self::PrimeIter;

    /// Binary search the list for num. `Ok(i)` is the index of num, `Err(i)` is the number of
    /// stored primes smaller than num.
    fn position(&self, num: u64) -> Result<usize, usize>;

    /// Every prime not exceeding the bound is stored
    fn bound(&self) -> u64;

    /// Test whether num is a stored prime
    fn contains(&self, num: u64) -> bool {
        self.position(num).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_count_accessors_test() {
        let exact = PrimeCount::Exact(25);
        assert_eq!(exact.value(), 25);
        assert!(exact.is_exact());
        assert_eq!(<(u64, bool)>::from(exact), (25, true));

        let estimate = PrimeCount::Estimate(1465);
        assert_eq!(estimate.value(), 1465);
        assert!(!estimate.is_exact());
        let (count, exact): (u64, bool) = estimate.into();
        assert_eq!((count, exact), (1465, false));
    }
}
