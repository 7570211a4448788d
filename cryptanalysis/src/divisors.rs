/// Returns the divisors of `n` greater than 1, ascending and without duplicates.
///
/// `n` itself is included when `n > 1`. `divisors(0)` and `divisors(1)` are empty
pub fn divisors(n: usize) -> Vec<usize> {
    if n < 2 {
        return Vec::new();
    }
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 2;
    while d <= n / d {
        if n % d == 0 {
            small.push(d);
            if d != n / d {
                large.push(n / d);
            }
        }
        d += 1;
    }
    // `large` was filled in descending order and every entry is above ⌊√n⌋
    small.extend(large.into_iter().rev());
    small.push(n);
    small
}

/// Greatest common divisor, `gcd(0, 0) == 0`
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
