//! # Algorithms
//!
//! Pure integer routines, generic over the primitive integer types through the
//! traits of the `num` crate.
pub mod trial_division;
