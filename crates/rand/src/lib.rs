//! Entropy for dstuffer
//!
//! Concrete [`EntropySource`] providers plus a process-wide engine that
//! lets an application swap the active provider without touching any code
//! that consumes randomness.
//!
//! Key generation always receives its entropy as an explicit
//! `&mut dyn EntropySource`. Passing [`EngineEntropy`] routes those requests
//! through the engine; passing a provider directly bypasses it.

#![forbid(unsafe_code)]

pub mod engine;
pub mod provider;

pub use dstuffer_api::EntropySource;
pub use engine::{EngineEntropy, EngineState};
pub use provider::{
    CountingEntropy, DeterministicEntropy, EntropyCounter, OsEntropy, RngEntropy,
};
