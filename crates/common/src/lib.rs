//! Common implementations shared across the dstuffer workspace
//!
//! The central type is [`Stuffer`], a byte buffer with independent read and
//! write cursors. Every parser in the workspace consumes its input through
//! one, so bounds are enforced in a single place.

#![forbid(unsafe_code)]

pub mod stuffer;

pub use stuffer::Stuffer;
