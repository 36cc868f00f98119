//! Montgomery-form modular arithmetic over an odd modulus

use super::{adc, mac, sbb, BigUint};
use dstuffer_api::{Error, Result};
use dstuffer_internal::ct_mask_select;
use subtle::{ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Window width for exponentiation
const WINDOW_BITS: usize = 4;
const TABLE_SIZE: usize = 1 << WINDOW_BITS;

/// Precomputed values for arithmetic modulo a fixed odd modulus
///
/// Residues are kept as little-endian limb vectors of the modulus width,
/// scaled by R = 2^(64 * limbs).
#[derive(Clone, Debug)]
pub struct MontgomeryContext {
    modulus: BigUint,
    m: Vec<u64>,
    /// -(m^{-1}) mod 2^64
    n0: u64,
    /// R^2 mod m
    r2: Vec<u64>,
    /// R mod m, i.e. 1 in Montgomery form
    one: Vec<u64>,
}

impl MontgomeryContext {
    /// Build a context for `modulus`, which must be odd and greater than 1
    pub fn new(modulus: &BigUint) -> Result<Self> {
        if !modulus.is_odd() || *modulus <= BigUint::one() {
            return Err(Error::param(
                "montgomery context",
                "modulus must be odd and greater than 1",
            ));
        }

        let n = modulus.limbs().len();
        let m = modulus.limbs_padded(n);

        // Newton iteration doubles the correct low bits each round; an odd
        // m is its own inverse modulo 8.
        let mut inv = m[0];
        for _ in 0..5 {
            inv = inv.wrapping_mul(2u64.wrapping_sub(m[0].wrapping_mul(inv)));
        }
        let n0 = inv.wrapping_neg();

        let one = power_of_two_limbs(n).rem(modulus).limbs_padded(n);
        let r2 = power_of_two_limbs(2 * n).rem(modulus).limbs_padded(n);

        Ok(Self {
            modulus: modulus.clone(),
            m,
            n0,
            r2,
            one,
        })
    }

    /// The modulus this context reduces by
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Width of a residue in 64-bit limbs
    pub fn limb_count(&self) -> usize {
        self.m.len()
    }

    /// Montgomery product `a * b * R^-1 mod m` (CIOS)
    ///
    /// Both inputs must already be reduced.
    fn mont_mul(&self, a: &[u64], b: &[u64]) -> Vec<u64> {
        let n = self.m.len();
        let mut t = vec![0u64; n + 2];

        for &bi in b.iter().take(n) {
            let mut carry = 0u64;
            for j in 0..n {
                let (lo, c) = mac(t[j], a[j], bi, carry);
                t[j] = lo;
                carry = c;
            }
            let (lo, c) = adc(t[n], carry, 0);
            t[n] = lo;
            t[n + 1] = c;

            let k = t[0].wrapping_mul(self.n0);
            let (_, mut carry) = mac(t[0], k, self.m[0], 0);
            for j in 1..n {
                let (lo, c) = mac(t[j], k, self.m[j], carry);
                t[j - 1] = lo;
                carry = c;
            }
            let (lo, c) = adc(t[n], carry, 0);
            t[n - 1] = lo;
            t[n] = t[n + 1] + c;
        }

        let out = self.reduce_once(&t[..=n]);
        t.zeroize();
        out
    }

    /// Subtract m from a value below 2m without branching on the result
    fn reduce_once(&self, t: &[u64]) -> Vec<u64> {
        let n = self.m.len();
        let mut diff = vec![0u64; n + 1];
        let mut borrow = 0u64;
        for (i, d) in diff.iter_mut().enumerate() {
            let rhs = self.m.get(i).copied().unwrap_or(0);
            let (v, b) = sbb(t[i], rhs, borrow);
            *d = v;
            borrow = b;
        }

        // borrow is all-ones when t < m, in which case t is kept.
        let mut out = vec![0u64; n];
        ct_mask_select(&mut out, &diff[..n], &t[..n], borrow);
        diff.zeroize();
        out
    }

    fn to_mont(&self, x: &BigUint) -> Vec<u64> {
        let reduced = if *x >= self.modulus {
            x.rem(&self.modulus)
        } else {
            x.clone()
        };
        let mut limbs = reduced.limbs_padded(self.m.len());
        let out = self.mont_mul(&limbs, &self.r2);
        limbs.zeroize();
        out
    }

    fn from_mont(&self, a: &[u64]) -> BigUint {
        let mut unit = vec![0u64; self.m.len()];
        unit[0] = 1;
        BigUint::from_limbs(self.mont_mul(a, &unit))
    }

    /// `base^exponent mod m`
    ///
    /// Uses a fixed 4-bit window. Every window costs the same squarings and
    /// one multiplication, and table entries are selected by a full scan,
    /// so timing depends on the exponent's bit length only.
    pub fn mod_pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        let n = self.m.len();
        let mut base = self.to_mont(base);

        let mut table: Vec<Vec<u64>> = Vec::with_capacity(TABLE_SIZE);
        table.push(self.one.clone());
        for i in 1..TABLE_SIZE {
            let next = self.mont_mul(&table[i - 1], &base);
            table.push(next);
        }

        let mut acc = self.one.clone();
        let mut selected = vec![0u64; n];
        let windows = (exponent.bit_len() + WINDOW_BITS - 1) / WINDOW_BITS;

        for w in (0..windows).rev() {
            for _ in 0..WINDOW_BITS {
                acc = self.mont_mul(&acc, &acc);
            }

            let index = window_value(exponent, w);
            for (i, entry) in table.iter().enumerate() {
                let choice = (i as u8).ct_eq(&index);
                for (dst, src) in selected.iter_mut().zip(entry) {
                    dst.conditional_assign(src, choice);
                }
            }
            acc = self.mont_mul(&acc, &selected);
        }

        let result = self.from_mont(&acc);

        for entry in table.iter_mut() {
            entry.zeroize();
        }
        base.zeroize();
        acc.zeroize();
        selected.zeroize();

        result
    }
}

/// 2^(64 * limbs) as a `BigUint`
fn power_of_two_limbs(limbs: usize) -> BigUint {
    let mut v = vec![0u64; limbs + 1];
    v[limbs] = 1;
    BigUint::from_limbs(v)
}

fn window_value(exponent: &BigUint, window: usize) -> u8 {
    (0..WINDOW_BITS).fold(0u8, |acc, i| {
        acc | ((exponent.bit(window * WINDOW_BITS + i) as u8) << i)
    })
}
