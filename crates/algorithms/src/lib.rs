//! Arithmetic primitives for the dstuffer Diffie-Hellman backend
//!
//! This crate provides variable-width unsigned integers and Montgomery
//! modular exponentiation, sized at runtime from the decoded prime.
//!
//! # Security Features
//!
//! - Intermediate values holding exponents are zeroized on drop
//! - Exponentiation uses a fixed window with constant-time table lookups

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bignum;

pub use bignum::{BigUint, MontgomeryContext};
