//! # prime-factor
//!
//! Primality testing and prime-power factorization of native integers by trial
//! division. The computation lives in the `algorithm` module, the factorization
//! representation and its textual rendering in the `data` module.
pub mod algorithm;
pub mod data;
