//! # Trial division
//!
//! Primality testing and factorization by scanning divisor candidates up to the
//! square root of the value under consideration.
use num::{Integer, PrimInt};

use crate::data::factorization::FactorizationError;

/// Whether `x` is prime.
///
/// Returns `false` for any value below `2`. For `x > 2`, every odd candidate
/// divisor `d` with `d * d <= x` is tried. The bound is evaluated as
/// `d <= x / d`, which never falls short by one the way a floating point square
/// root can, and never overflows near the top of the integer range.
pub fn is_prime<N: PrimInt + Integer>(x: N) -> bool {
    let two = N::one() + N::one();
    if x < two {
        return false;
    }
    if x == two {
        return true;
    }
    if x.is_even() {
        return false;
    }

    let mut divisor = two + N::one();
    while divisor <= x / divisor {
        if (x % divisor).is_zero() {
            return false;
        }
        divisor = divisor + two;
    }

    true
}

/// Prime-power factorization of a positive integer.
///
/// The result is a sequence of `(prime, power)` tuples with the primes strictly
/// ascending and every power at least one; their product equals `n`. The
/// factorization of `1` is empty. Values below `1` are rejected.
pub fn factorize<N: PrimInt + Integer>(n: N) -> Result<Vec<(N, u32)>, FactorizationError> {
    if n < N::one() {
        return Err(FactorizationError::NotPositive);
    }

    let mut factors = Vec::new();
    let mut remaining = n;

    // Each prime is divided out completely before the scan moves on, so a
    // composite candidate can never divide `remaining`; testing it for
    // primality first would not change the result.
    let mut candidate = N::one() + N::one();
    while candidate <= remaining / candidate {
        let mut power = 0_u32;
        while (remaining % candidate).is_zero() {
            remaining = remaining / candidate;
            power += 1;
        }
        if power > 0 {
            factors.push((candidate, power));
        }
        candidate = candidate + N::one();
    }
    // Whatever survives the scan has no divisor up to its own square root.
    if remaining > N::one() {
        factors.push((remaining, 1));
    }

    Ok(factors)
}
