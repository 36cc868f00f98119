//! Variable-width unsigned integers
//!
//! Little-endian `u64` limbs with no high zero limbs, so two equal values
//! always have identical representations.

use core::cmp::Ordering;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

mod montgomery;

pub use montgomery::MontgomeryContext;


// ============================================================================
// Arithmetic Helper Functions
// ============================================================================

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
///
/// `borrow` is an all-ones mask when set, matching what this returns.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

// ============================================================================
// BigUint
// ============================================================================

/// Arbitrary-precision unsigned integer
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct BigUint {
    limbs: Vec<u64>,
}

impl BigUint {
    /// The value 0
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    /// The value 1
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    /// Build from a machine word
    pub fn from_u64(value: u64) -> Self {
        Self::from_limbs(vec![value])
    }

    /// Build from little-endian limbs, trimming high zero limbs
    pub(crate) fn from_limbs(limbs: Vec<u64>) -> Self {
        let mut value = Self { limbs };
        value.trim();
        value
    }

    fn trim(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    /// Parse a big-endian magnitude; leading zero bytes are ignored
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs = vec![0u64; (bytes.len() + 7) / 8];
        for (i, &byte) in bytes.iter().rev().enumerate() {
            limbs[i / 8] |= (byte as u64) << ((i % 8) * 8);
        }
        Self::from_limbs(limbs)
    }

    /// Minimal big-endian encoding; zero encodes as a single `0x00`
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let len = self.byte_len().max(1);
        self.write_be(len)
    }

    /// Big-endian encoding left-padded to exactly `len` bytes
    ///
    /// Returns `None` if the value needs more than `len` bytes.
    pub fn to_be_bytes_padded(&self, len: usize) -> Option<Vec<u8>> {
        if self.byte_len() > len {
            return None;
        }
        Some(self.write_be(len))
    }

    fn write_be(&self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        for i in 0..self.byte_len() {
            out[len - 1 - i] = (self.limbs[i / 8] >> ((i % 8) * 8)) as u8;
        }
        out
    }

    /// Number of significant bits
    pub fn bit_len(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(top) => (self.limbs.len() - 1) * 64 + (64 - top.leading_zeros() as usize),
        }
    }

    /// Number of significant bytes
    pub fn byte_len(&self) -> usize {
        (self.bit_len() + 7) / 8
    }

    /// True for the value 0
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// True when the lowest bit is set
    pub fn is_odd(&self) -> bool {
        self.limbs.first().map_or(false, |l| l & 1 == 1)
    }

    /// Value of bit `index`, counting from the least significant
    pub fn bit(&self, index: usize) -> bool {
        self.limbs
            .get(index / 64)
            .map_or(false, |l| (l >> (index % 64)) & 1 == 1)
    }

    /// Little-endian limbs
    pub(crate) fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Limbs zero-extended to exactly `n` entries
    pub(crate) fn limbs_padded(&self, n: usize) -> Vec<u64> {
        debug_assert!(self.limbs.len() <= n);
        let mut out = vec![0u64; n];
        out[..self.limbs.len()].copy_from_slice(&self.limbs);
        out
    }

    /// `self - other`, or `None` if that would be negative
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if *self < *other {
            return None;
        }
        let mut limbs = self.limbs.clone();
        let mut borrow = 0u64;
        for (i, limb) in limbs.iter_mut().enumerate() {
            let rhs = other.limbs.get(i).copied().unwrap_or(0);
            let (d, b) = sbb(*limb, rhs, borrow);
            *limb = d;
            borrow = b;
        }
        Some(Self::from_limbs(limbs))
    }

    /// `self mod modulus` by binary long division
    ///
    /// Only used to bring out-of-range inputs into range, so speed is not a
    /// concern. Returns zero for a zero modulus.
    pub fn rem(&self, modulus: &Self) -> Self {
        if modulus.is_zero() {
            return Self::zero();
        }
        if *self < *modulus {
            return self.clone();
        }

        let n = modulus.limbs.len();
        let mut r = vec![0u64; n + 1];
        let m = modulus.limbs_padded(n + 1);

        for bit in (0..self.bit_len()).rev() {
            // r = 2r + bit
            let mut carry = self.bit(bit) as u64;
            for limb in r.iter_mut() {
                let next = *limb >> 63;
                *limb = (*limb << 1) | carry;
                carry = next;
            }
            if cmp_limbs(&r, &m) != Ordering::Less {
                let mut borrow = 0u64;
                for (limb, &rhs) in r.iter_mut().zip(&m) {
                    let (d, b) = sbb(*limb, rhs, borrow);
                    *limb = d;
                    borrow = b;
                }
            }
        }
        Self::from_limbs(r)
    }
}

/// Compare equal-length little-endian limb slices
pub(crate) fn cmp_limbs(a: &[u64], b: &[u64]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    a.iter().rev().cmp(b.iter().rev())
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| cmp_limbs(&self.limbs, &other.limbs))
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Values may be secret exponents; only the size is shown.
impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUint({} bits)", self.bit_len())
    }
}
