// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer predicates used once per run to pick the pruning mode.
//!
//! Every group whose order is a prime `p` or a prime square `p²` is abelian,
//! so for those orders the generator may restrict itself to symmetric tables.

/// True iff `n > 1` and no integer in `[2, floor(sqrt(n))]` divides `n`.
pub fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    let mut i = 2;
    // `i <= n / i` is `i * i <= n` without the overflow.
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// True iff `n == p * p` for some prime `p`.
pub fn is_prime_square(n: usize) -> bool {
    let mut p = 2;
    while p <= n / p {
        if p * p == n && is_prime(p) {
            return true;
        }
        p += 1;
    }
    false
}

/// True iff every group of order `n` is known to be abelian by the
/// prime / prime-square rule.
pub fn must_be_abelian(n: usize) -> bool {
    is_prime(n) || is_prime_square(n)
}
