//! Finite-field Diffie-Hellman
//!
//! - [`pkcs3`]: DER `DHParameter` decoding
//! - [`DhParameters`]: decoded prime and generator plus the owned context
//! - [`DhContext`]: key-pair generation and shared-secret derivation

mod context;
mod keys;
mod params;
pub mod pkcs3;

pub use context::DhContext;
pub use keys::{DhKeyPair, DhPublicKey, DhSecretKey, DhSharedSecret};
pub use params::DhParameters;
pub use pkcs3::{pkcs3_from_slice, pkcs3_to_dh_params};
