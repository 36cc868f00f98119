//! Encoding utilities for the dstuffer workspace
//!
//! - [`pem`]: strips a PEM envelope and base64-decodes its body
//! - [`der`]: reads DER tag/length/value triples from a [`Stuffer`]
//!
//! Both consume input through a [`Stuffer`] so every read is bounds-checked.
//!
//! [`Stuffer`]: dstuffer_common::Stuffer

#![forbid(unsafe_code)]

pub mod der;
pub mod pem;

pub use pem::{dhparams_from_pem, pem_to_der};
