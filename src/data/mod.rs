//! # Data structures
//!
//! Representation of a computed factorization, the trait that exposes it on the
//! primitive integer types, and the associated error type.
pub mod factorization;
