//! DH context built from a prime and generator

use super::keys::{DhKeyPair, DhPublicKey, DhSecretKey, DhSharedSecret};
use crate::config::DhConfig;
use dstuffer_algorithms::{BigUint, MontgomeryContext};
use dstuffer_api::error::validation;
use dstuffer_api::{EntropySource, Error, KeyAgreement, Result};
use dstuffer_params::traditional::dh::{DH_MAX_PRIME_BITS, DH_MIN_PRIVATE_BITS};
use dstuffer_rand::EngineEntropy;
use log::debug;
use zeroize::Zeroizing;

/// Backend state for one set of domain parameters
///
/// Construction checks that the prime is odd and greater than 3 and that
/// the generator lies in `[2, p - 2]`. Primality is not tested.
#[derive(Clone)]
pub struct DhContext {
    prime: BigUint,
    generator: BigUint,
    mont: MontgomeryContext,
    config: DhConfig,
}

impl DhContext {
    /// Build a context with the default configuration
    pub fn new(prime: &[u8], generator: &[u8]) -> Result<Self> {
        Self::with_config(prime, generator, DhConfig::default())
    }

    /// Build a context with an explicit configuration
    pub fn with_config(prime: &[u8], generator: &[u8], config: DhConfig) -> Result<Self> {
        let prime = BigUint::from_be_bytes(prime);
        let generator = BigUint::from_be_bytes(generator);

        validation::parameter(
            prime.is_odd() && prime > BigUint::from_u64(3),
            "dh context",
            "prime must be odd and greater than 3",
        )?;
        validation::parameter(
            prime.bit_len() <= DH_MAX_PRIME_BITS,
            "dh context",
            "prime is too large",
        )?;

        let p_minus_2 = prime
            .checked_sub(&BigUint::from_u64(2))
            .ok_or_else(|| Error::param("dh context", "prime must be odd and greater than 3"))?;
        validation::parameter(
            generator >= BigUint::from_u64(2) && generator <= p_minus_2,
            "dh context",
            "generator must lie in [2, p - 2]",
        )?;

        let mont = MontgomeryContext::new(&prime)?;
        debug!("created DH context with {}-bit prime", prime.bit_len());

        Ok(Self {
            prime,
            generator,
            mont,
            config,
        })
    }

    /// Prime as minimal big-endian bytes
    pub fn prime_bytes(&self) -> Vec<u8> {
        self.prime.to_be_bytes()
    }

    /// Generator as minimal big-endian bytes
    pub fn generator_bytes(&self) -> Vec<u8> {
        self.generator.to_be_bytes()
    }

    /// Bit length of the prime
    pub fn prime_bits(&self) -> usize {
        self.prime.bit_len()
    }

    /// Byte length of the prime, which is also the public value length
    pub fn prime_len(&self) -> usize {
        self.prime.byte_len()
    }

    /// Configuration in effect
    pub fn config(&self) -> &DhConfig {
        &self.config
    }

    /// Private exponent length in bits
    pub fn private_bits(&self) -> usize {
        let max = self.prime_bits() - 1;
        self.config
            .private_value_bits
            .unwrap_or(max)
            .clamp(DH_MIN_PRIVATE_BITS, max)
    }

    /// Generate a key pair, drawing entropy from `entropy` exactly once
    ///
    /// The private exponent has its top bit forced so it always has
    /// [`private_bits`](Self::private_bits) significant bits and never needs
    /// to be redrawn. An entropy failure is returned unchanged.
    pub fn generate_keypair(&self, entropy: &mut dyn EntropySource) -> Result<DhKeyPair> {
        let bits = self.private_bits();
        let mut x_bytes = Zeroizing::new(vec![0u8; (bits + 7) / 8]);
        entropy.get_random_bytes(&mut x_bytes)?;

        let excess = x_bytes.len() * 8 - bits;
        x_bytes[0] &= 0xff >> excess;
        x_bytes[0] |= 0x80 >> excess;

        let x = BigUint::from_be_bytes(&x_bytes);
        let y = self.mont.mod_pow(&self.generator, &x);
        let public = y
            .to_be_bytes_padded(self.prime_len())
            .ok_or_else(|| Error::param("dh keygen", "public value wider than prime"))?;

        debug!(
            "generated DH key pair: {}-bit exponent from '{}'",
            bits,
            entropy.name()
        );
        Ok(DhKeyPair::new(
            DhPublicKey::new(public),
            DhSecretKey::new(x_bytes.to_vec()),
        ))
    }

    /// Generate a key pair from whichever provider the entropy engine has active
    pub fn generate_keypair_with_engine(&self) -> Result<DhKeyPair> {
        self.generate_keypair(&mut EngineEntropy)
    }

    /// Derive `peer^x mod p`
    ///
    /// Peer values outside `[2, p - 2]` are rejected. Leading zero bytes of
    /// the result are stripped.
    pub fn compute_shared_secret(
        &self,
        secret: &DhSecretKey,
        peer_public: &DhPublicKey,
    ) -> Result<DhSharedSecret> {
        let peer = BigUint::from_be_bytes(peer_public.as_bytes());
        let in_range = self
            .prime
            .checked_sub(&BigUint::from_u64(2))
            .map_or(false, |max| peer >= BigUint::from_u64(2) && peer <= max);
        validation::parameter(in_range, "dh shared secret", "peer public value out of range")?;

        let x = BigUint::from_be_bytes(secret.as_bytes());
        let z = self.mont.mod_pow(&peer, &x);
        Ok(DhSharedSecret::new(z.to_be_bytes()))
    }
}

impl KeyAgreement for DhContext {
    type PublicKey = DhPublicKey;
    type SecretKey = DhSecretKey;
    type SharedSecret = DhSharedSecret;
    type KeyPair = DhKeyPair;

    fn name(&self) -> &'static str {
        "FFDH"
    }

    fn generate_keypair(&self, entropy: &mut dyn EntropySource) -> Result<DhKeyPair> {
        DhContext::generate_keypair(self, entropy)
    }

    fn shared_secret(
        &self,
        secret_key: &DhSecretKey,
        peer_public: &DhPublicKey,
    ) -> Result<DhSharedSecret> {
        self.compute_shared_secret(secret_key, peer_public)
    }
}

impl core::fmt::Debug for DhContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DhContext")
            .field("prime_bits", &self.prime_bits())
            .field("generator", &self.generator_bytes())
            .field("config", &self.config)
            .finish()
    }
}
