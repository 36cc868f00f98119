//! Diffie-Hellman parameters and key agreement
//!
//! Decodes PKCS#3 `DHParameter` structures into [`DhParameters`], each of
//! which owns a [`DhContext`] able to generate key pairs and derive shared
//! secrets. Randomness always comes from an explicit
//! [`EntropySource`](dstuffer_api::EntropySource).

#![forbid(unsafe_code)]

pub mod config;
pub mod dh;

pub use config::DhConfig;
pub use dh::{
    pkcs3_from_slice, pkcs3_to_dh_params, DhContext, DhKeyPair, DhParameters, DhPublicKey,
    DhSecretKey, DhSharedSecret,
};
