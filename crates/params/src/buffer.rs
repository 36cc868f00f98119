//! Growth policy for growable buffers

/// Smallest number of bytes a growable buffer adds when it reallocates
pub const MIN_GROWTH_BYTES: usize = 1024;

/// Multiplier applied to the current capacity on reallocation
pub const GROWTH_FACTOR: usize = 2;
