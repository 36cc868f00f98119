// File: crates/api/src/traits/key_agreement.rs

//! Trait definition for finite-field key agreement backends

use super::entropy::EntropySource;
use crate::Result;
use zeroize::Zeroize;

/// Key agreement over a fixed set of domain parameters.
///
/// Implementors hold the domain parameters themselves, so every method
/// takes `&self`.
pub trait KeyAgreement {
    /// Public value sent to the peer.
    type PublicKey: Clone;

    /// Private exponent. Must be wiped when dropped.
    type SecretKey: Zeroize;

    /// Agreed secret. Must be wiped when dropped.
    type SharedSecret: Zeroize;

    /// Public and secret key held together.
    type KeyPair;

    /// Returns the algorithm name.
    fn name(&self) -> &'static str;

    /// Generate a new key pair.
    ///
    /// # Security Requirements
    /// - All randomness must come from `entropy`.
    /// - An entropy failure aborts generation and is returned unchanged.
    fn generate_keypair(&self, entropy: &mut dyn EntropySource) -> Result<Self::KeyPair>;

    /// Derive the shared secret from our secret key and the peer's public value.
    ///
    /// # Security Requirements
    /// - The peer value must be validated before use.
    fn shared_secret(
        &self,
        secret_key: &Self::SecretKey,
        peer_public: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
