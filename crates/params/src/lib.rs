//! Constant values for dstuffer
//!
//! This crate holds the fixed values shared across the workspace: PEM
//! envelope markers, DER tags, buffer growth policy and Diffie-Hellman
//! group sizes.

#![no_std]

pub mod buffer;
pub mod encoding;
pub mod traditional;
