use small_primes::{coprime, is_prime, prime_count, sieve, PrimeCount};

fn main() {
    println!("Primes not exceeding 20: {:?}", sieve(20));

    for n in [2, 23, 49, 73, 98765, 1000003, 10007 * 10009, i32::MAX as i64] {
        let kind = if is_prime(n) { "prime" } else { "composite" };
        println!("{} is {}", n, kind);
    }

    let ns = [2, 3, 4, 5, 6];
    for (i, &a) in ns.iter().enumerate() {
        for &b in &ns[i + 1..] {
            if coprime(a, b) {
                println!("{} and {} are coprime", a, b);
            }
        }
    }

    for n in [6, 11, 23, 12345] {
        match prime_count(n) {
            PrimeCount::Exact(pi) => println!("There are {} primes in [0, {}]", pi, n),
            PrimeCount::Estimate(pi) => {
                println!("There are approximately {} primes in [0, {}]", pi, n)
            }
        }
    }
}
