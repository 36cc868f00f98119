//! Secure zeroing of byte buffers

use zeroize::Zeroize;

/// Zero a buffer in a way the optimizer cannot elide
#[inline]
pub fn secure_zero(data: &mut [u8]) {
    data.zeroize();
}
