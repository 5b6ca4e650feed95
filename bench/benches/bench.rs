#[macro_use]
extern crate criterion;
use criterion::{black_box, BenchmarkId, Criterion};
use num_integer::Integer;
use primal_check::miller_rabin;
use rand::random;
use small_primes::{coprime, is_prime, sieve};

/// Sieve over all numbers, crossing off from p*p
fn baseline_sieve(n: usize) -> Vec<usize> {
    let mut composite = vec![false; n + 1];
    let mut i = 2;
    while i * i <= n {
        if !composite[i] {
            for j in (i * i..=n).step_by(i) {
                composite[j] = true;
            }
        }
        i += 1;
    }
    (2..=n).filter(|&i| !composite[i]).collect()
}

/// Trial division by every number up to ceil(sqrt(n))
fn baseline_is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let max = (n as f64).sqrt().ceil() as i64;
    n == 2 || (2..=max).all(|d| n % d != 0)
}

pub fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");

    // odd-only sieve is expected to be about twice as fast as the baseline
    for n in [10_000usize, 1_000_000, 10_000_000] {
        group.bench_with_input(BenchmarkId::new("small-primes (this crate)", n), &n, |b, &n| {
            b.iter(|| sieve(n as i64).len())
        });
        group.bench_with_input(BenchmarkId::new("baseline", n), &n, |b, &n| {
            b.iter(|| baseline_sieve(n).len())
        });
    }

    group.finish();
}

pub fn bench_is_prime(c: &mut Criterion) {
    const N0: i64 = 1_000_000;
    const STEP: usize = 101;
    const N1: i64 = 2_000_000_000;
    const N2: i64 = N1 + N0;

    let numbers = || (1..N0).step_by(STEP).chain((N1..N2).step_by(STEP));

    let mut group = c.benchmark_group("is_prime");

    group.bench_function("small-primes (this crate)", |b| {
        b.iter(|| numbers().filter(|&n| is_prime(n)).count())
    });
    group.bench_function("baseline", |b| {
        b.iter(|| numbers().filter(|&n| baseline_is_prime(n)).count())
    });
    group.bench_function("primal-check", |b| {
        b.iter(|| numbers().filter(|&n| miller_rabin(n as u64)).count())
    });

    group.finish();
}

pub fn bench_coprime(c: &mut Criterion) {
    let pairs: Vec<(i64, i64)> = (0..1000)
        .map(|_| (random::<u32>() as i64, random::<u32>() as i64))
        .collect();

    let mut group = c.benchmark_group("coprime");

    group.bench_function("small-primes (this crate)", |b| {
        b.iter(|| pairs.iter().filter(|&&(x, y)| coprime(black_box(x), y)).count())
    });
    group.bench_function("num-integer", |b| {
        b.iter(|| pairs.iter().filter(|&&(x, y)| black_box(x).gcd(&y) == 1).count())
    });

    group.finish();
}

criterion_group!(benches, bench_sieve, bench_is_prime, bench_coprime);
criterion_main!(benches);
