//! Public API traits and types for the dstuffer workspace
//!
//! This crate provides the error type shared by every dstuffer crate and the
//! trait seams (`EntropySource`, `KeyAgreement`) where callers plug in their
//! own implementations.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::{EntropySource, KeyAgreement};

// Re-export trait modules for direct access
pub use traits::{entropy, key_agreement};
