// File: crates/kem/src/dh/keys.rs

use dstuffer_internal::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Public value `g^x mod p`, big-endian and left-padded to the prime length
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DhPublicKey(Vec<u8>);

/// Private exponent `x`
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DhSecretKey(Vec<u8>);

/// Agreed secret with leading zero bytes stripped
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DhSharedSecret(Vec<u8>);

// DhPublicKey methods
impl DhPublicKey {
    /// Create a public key from bytes
    ///
    /// The value is range-checked against the prime only when it is used.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the length of the public key
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the public key is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get a reference to the inner bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Export the public key to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

// DhSecretKey methods
impl DhSecretKey {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the length of the secret key
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the secret key is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Export the secret key to bytes with zeroization
    pub fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for DhSecretKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.0, &other.0)
    }
}

impl Eq for DhSecretKey {}

impl core::fmt::Debug for DhSecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "DhSecretKey([REDACTED; {}])", self.0.len())
    }
}

// DhSharedSecret methods
impl DhSharedSecret {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the length of the shared secret
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the shared secret is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Export the shared secret to bytes with zeroization
    pub fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

impl PartialEq for DhSharedSecret {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.0, &other.0)
    }
}

impl Eq for DhSharedSecret {}

impl core::fmt::Debug for DhSharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "DhSharedSecret([REDACTED; {}])", self.0.len())
    }
}

/// A freshly generated key pair
#[derive(Clone, Debug)]
pub struct DhKeyPair {
    public: DhPublicKey,
    secret: DhSecretKey,
}

impl DhKeyPair {
    pub(crate) fn new(public: DhPublicKey, secret: DhSecretKey) -> Self {
        Self { public, secret }
    }

    /// The public half, to send to the peer
    pub fn public_key(&self) -> &DhPublicKey {
        &self.public
    }

    /// The private half
    pub fn secret_key(&self) -> &DhSecretKey {
        &self.secret
    }

    /// Split into its halves
    pub fn into_parts(self) -> (DhPublicKey, DhSecretKey) {
        (self.public, self.secret)
    }
}
