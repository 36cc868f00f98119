// File: crates/api/src/traits/entropy.rs

//! Trait definition for pluggable sources of random bytes
//!
//! Every operation that needs entropy takes an `EntropySource`, either one
//! the caller supplies directly or the process-wide engine's dispatcher.
//! Swapping the source never requires touching parsing or key-generation
//! code.

use crate::Result;

/// A source of cryptographically secure random bytes.
///
/// # Contract
/// - `get_random_bytes` either fills all of `dest` or returns an error.
/// - A failure is final for that call: implementations must not fall back
///   to a weaker source and callers must not retry silently.
pub trait EntropySource: Send {
    /// Short identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fill `dest` entirely with random bytes.
    fn get_random_bytes(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn get_random_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).get_random_bytes(dest)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn get_random_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).get_random_bytes(dest)
    }
}
