//! # Prime factorizations
//!
//! Sparse prime-power representation of a positive integer.
use std::error::Error;
use std::fmt;

use itertools::Itertools;
use num::PrimInt;

mod primitive;

/// Types whose values can be decomposed into prime factors.
pub trait Factorizable: Sized {
    /// Some prime greater than 1.
    type Factor: Ord;
    /// How often the factor appears in the number.
    type Power;

    /// Prime factors in ascending order, each with its multiplicity.
    fn prime_factors(&self) -> Result<Vec<(Self::Factor, Self::Power)>, FactorizationError>;
}

/// Prime factorization of a positive integer.
///
/// `(prime factor, power)` tuples with the primes strictly ascending. The
/// powers can't be zero, as this is a sparse representation. When the
/// collection is empty, the value `1` is represented.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Factorization<N> {
    factors: Vec<(N, u32)>,
}

impl<N> Factorization<N>
where
    N: Factorizable<Factor = N, Power = u32>,
{
    /// Factorize `n`, rejecting values below `1`.
    pub fn compute(n: N) -> Result<Self, FactorizationError> {
        n.prime_factors().map(|factors| Self { factors })
    }
}

impl<N> Factorization<N> {
    /// The `(prime, power)` tuples, ascending by prime.
    pub fn factors(&self) -> &[(N, u32)] {
        &self.factors
    }

    /// Whether this is the factorization of `1`.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl<N: PrimInt> Factorization<N> {
    /// The represented value, recomputed as the product of the prime powers.
    pub fn product(&self) -> N {
        self.factors
            .iter()
            .fold(N::one(), |total, &(prime, power)| total * prime.pow(power))
    }

    /// How many positive integers divide the represented value.
    ///
    /// A divisor picks, per prime, a power between zero and the prime's
    /// multiplicity.
    pub fn number_of_divisors(&self) -> u64 {
        self.factors
            .iter()
            .map(|&(_, power)| u64::from(power) + 1)
            .product()
    }

    /// Whether the represented value is prime.
    pub fn is_prime(&self) -> bool {
        self.factors.len() == 1 && self.factors[0].1 == 1
    }
}

impl<N: fmt::Display> fmt::Display for Factorization<N> {
    /// Factors joined by `" * "`; a power of one is rendered as the bare prime,
    /// higher powers as `prime^power`. The factorization of `1` renders empty.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            self.factors.iter().format_with(" * ", |(prime, power), g| {
                if *power == 1 {
                    g(prime)
                } else {
                    g(&format_args!("{}^{}", prime, power))
                }
            }),
        )
    }
}

/// Factorizing a value outside the domain of the algorithm.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FactorizationError {
    /// The input was zero or negative.
    NotPositive,
}

impl fmt::Display for FactorizationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotPositive => f.write_str("factorization is defined for positive integers only"),
        }
    }
}

impl Error for FactorizationError {}

#[cfg(test)]
mod test;
