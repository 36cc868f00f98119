//! Seeded ChaCha20 provider for reproducible key generation in tests

use super::source_failure;
use dstuffer_api::{EntropySource, Result};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Reproducible entropy from a fixed seed
///
/// Two instances built from the same seed produce the same byte stream.
/// Never use this outside tests and known-answer vectors.
#[derive(Clone)]
pub struct DeterministicEntropy {
    rng: ChaCha20Rng,
}

impl DeterministicEntropy {
    /// Seed from 32 bytes
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            rng: ChaCha20Rng::from_seed(seed),
        }
    }

    /// Seed from a `u64`, convenient for tests
    pub fn from_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl EntropySource for DeterministicEntropy {
    fn name(&self) -> &'static str {
        "deterministic"
    }

    fn get_random_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng
            .try_fill_bytes(dest)
            .map_err(|e| source_failure("deterministic", e))
    }
}
