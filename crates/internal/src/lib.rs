//! Internal utilities for the dstuffer workspace
//!
//! Not part of the public API; shared by the buffer, encoding and key crates.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod zeroing;

pub use constant_time::{ct_eq, ct_mask_select, ct_select};
pub use zeroing::secure_zero;
