//! # dstuffer
//!
//! Parsing of semi-trusted Diffie-Hellman parameter files and a swappable
//! entropy engine for key generation.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dstuffer = "0.3"
//! ```
//!
//! ```no_run
//! use dstuffer::prelude::*;
//!
//! # fn read_dhparams_file() -> Vec<u8> { Vec::new() }
//! # fn main() -> dstuffer::api::Result<()> {
//! let pem = read_dhparams_file();
//! let mut input = Stuffer::with_data(&pem);
//! let mut der = Stuffer::growable_alloc(0);
//! dhparams_from_pem(&mut input, &mut der)?;
//!
//! let params = pkcs3_to_dh_params(&mut der)?;
//! params.check(&DhConfig::default())?;
//!
//! engine::init()?;
//! let pair = params.context()?.generate_keypair_with_engine()?;
//! # let _ = pair;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `backend` (default): DH context and the entropy engine
//! - `serde`: serialization for public keys and [`kem::DhConfig`]
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dstuffer-common`]: the Stuffer cursor buffer
//! - [`dstuffer-utils`]: PEM and DER decoding
//! - [`dstuffer-algorithms`]: big integers and Montgomery exponentiation
//! - [`dstuffer-rand`]: entropy providers and the engine
//! - [`dstuffer-kem`]: PKCS#3 parameters and DH key agreement

// Core re-exports (always available)
pub use dstuffer_api as api;
pub use dstuffer_common as common;
pub use dstuffer_internal as internal;
pub use dstuffer_params as params;
pub use dstuffer_utils as utils;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use dstuffer_algorithms as algorithms;

#[cfg(feature = "entropy")]
pub use dstuffer_rand as rand;

#[cfg(feature = "kem")]
pub use dstuffer_kem as kem;

/// Common imports for dstuffer users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{EntropySource, KeyAgreement};

    pub use zeroize::{Zeroize, Zeroizing};

    pub use crate::common::Stuffer;
    pub use crate::utils::{dhparams_from_pem, pem_to_der};

    #[cfg(feature = "entropy")]
    pub use crate::rand::{
        engine, CountingEntropy, DeterministicEntropy, EngineEntropy, OsEntropy,
    };

    #[cfg(feature = "kem")]
    pub use crate::kem::{
        pkcs3_from_slice, pkcs3_to_dh_params, DhConfig, DhContext, DhKeyPair, DhParameters,
        DhPublicKey, DhSharedSecret,
    };
}
