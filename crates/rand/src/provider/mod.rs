//! Entropy providers
//!
//! Every provider fills the whole destination or fails; none of them falls
//! back to another source.

use dstuffer_api::{EntropySource, Error, Result};
use log::warn;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

mod counting;
mod deterministic;

pub use counting::{CountingEntropy, EntropyCounter};
pub use deterministic::DeterministicEntropy;


/// Map a generator error to the workspace error, logging it
pub(crate) fn source_failure(source_name: &'static str, err: rand::Error) -> Error {
    warn!("entropy source '{}' failed: {}", source_name, err);
    Error::EntropySourceFailure {
        source_name,
        message: err.to_string(),
    }
}

/// The operating system's secure random source
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn name(&self) -> &'static str {
        "os"
    }

    fn get_random_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| source_failure(self.name(), e))
    }
}

/// Adapter exposing any `rand` cryptographic generator as an entropy source
pub struct RngEntropy<R> {
    rng: R,
    name: &'static str,
}

impl<R: CryptoRng + RngCore + Send> RngEntropy<R> {
    /// Wrap `rng` under the name `"rng"`
    pub fn new(rng: R) -> Self {
        Self::with_name(rng, "rng")
    }

    /// Wrap `rng` under a caller-chosen name used in logs and errors
    pub fn with_name(rng: R, name: &'static str) -> Self {
        Self { rng, name }
    }

    /// Unwrap the generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: CryptoRng + RngCore + Send> EntropySource for RngEntropy<R> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn get_random_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        let name = self.name;
        self.rng
            .try_fill_bytes(dest)
            .map_err(|e| source_failure(name, e))
    }
}
