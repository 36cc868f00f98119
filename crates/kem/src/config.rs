//! Runtime configuration for the DH backend

use dstuffer_params::traditional::dh::DH_MIN_PRIME_BITS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunables applied when validating parameters and generating keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DhConfig {
    /// Smallest prime accepted by [`DhParameters::check`](crate::DhParameters::check)
    pub min_prime_bits: usize,

    /// Length of generated private exponents. `None` uses one bit less than
    /// the prime. Values are clamped to `[2, prime_bits - 1]`.
    pub private_value_bits: Option<usize>,
}

impl Default for DhConfig {
    fn default() -> Self {
        Self {
            min_prime_bits: DH_MIN_PRIME_BITS,
            private_value_bits: None,
        }
    }
}

impl DhConfig {
    /// Override the minimum prime size
    pub fn with_min_prime_bits(mut self, bits: usize) -> Self {
        self.min_prime_bits = bits;
        self
    }

    /// Fix the private exponent length
    pub fn with_private_value_bits(mut self, bits: usize) -> Self {
        self.private_value_bits = Some(bits);
        self
    }
}
