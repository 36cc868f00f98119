//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal. Slices of different length compare
/// unequal immediately; only the contents are compared in constant time.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time selection
///
/// Returns `a` if `condition` is false, `b` if `condition` is true.
pub fn ct_select<T>(a: T, b: T, condition: bool) -> T
where
    T: ConditionallySelectable,
{
    let choice = Choice::from(condition as u8);
    T::conditional_select(&a, &b, choice)
}

/// Limb-wise selection driven by an all-ones / all-zeros mask
///
/// Writes `b` into `dst` where `mask == u64::MAX` and `a` where `mask == 0`.
#[inline]
pub fn ct_mask_select(dst: &mut [u64], a: &[u64], b: &[u64], mask: u64) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(dst.len(), a.len());

    for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
        *d = (x & !mask) | (y & mask);
    }
}
