//! Decoded DH parameters

use super::context::DhContext;
use super::keys::DhKeyPair;
use crate::config::DhConfig;
use dstuffer_api::error::validation;
use dstuffer_api::{EntropySource, Error, Result};
use log::debug;

/// Prime and generator together with the context built from them
///
/// The context is released by [`free`](Self::free) or on drop. After
/// `free` the raw values stay readable but every backend operation fails
/// with `InvalidState`.
pub struct DhParameters {
    prime: Vec<u8>,
    generator: Vec<u8>,
    context: Option<DhContext>,
}

impl DhParameters {
    /// Build parameters and their context; nothing is kept on failure
    pub fn new(prime: &[u8], generator: &[u8]) -> Result<Self> {
        Self::with_config(prime, generator, DhConfig::default())
    }

    /// As [`new`](Self::new), with an explicit backend configuration
    pub fn with_config(prime: &[u8], generator: &[u8], config: DhConfig) -> Result<Self> {
        let context = DhContext::with_config(prime, generator, config)?;
        Ok(Self {
            prime: context.prime_bytes(),
            generator: context.generator_bytes(),
            context: Some(context),
        })
    }

    /// Prime as minimal big-endian bytes
    pub fn prime(&self) -> &[u8] {
        &self.prime
    }

    /// Generator as minimal big-endian bytes
    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    /// Bit length of the prime
    pub fn prime_bits(&self) -> usize {
        match self.prime.first() {
            None => 0,
            Some(top) => self.prime.len() * 8 - top.leading_zeros() as usize,
        }
    }

    /// The backend context, unless it has been freed
    pub fn context(&self) -> Result<&DhContext> {
        self.context.as_ref().ok_or(Error::InvalidState {
            context: "dh parameters",
            state: "freed",
        })
    }

    /// True once [`free`](Self::free) has run
    pub fn is_freed(&self) -> bool {
        self.context.is_none()
    }

    /// Enforce the minimum prime size from `config`
    pub fn check(&self, config: &DhConfig) -> Result<()> {
        let context = self.context()?;
        validation::min_bits("dh parameters check", context.prime_bits(), config.min_prime_bits)
    }

    /// Generate a key pair from these parameters
    pub fn generate_keypair(&self, entropy: &mut dyn EntropySource) -> Result<DhKeyPair> {
        self.context()?.generate_keypair(entropy)
    }

    /// Release the backend context; calling it again has no effect
    pub fn free(&mut self) {
        if self.context.take().is_some() {
            debug!("released DH context");
        }
    }
}

impl Drop for DhParameters {
    fn drop(&mut self) {
        self.free();
    }
}

impl core::fmt::Debug for DhParameters {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DhParameters")
            .field("prime_bits", &self.prime_bits())
            .field("generator", &self.generator)
            .field("freed", &self.is_freed())
            .finish()
    }
}
