//! Core traits shared across the workspace

pub mod entropy;
pub mod key_agreement;

pub use entropy::EntropySource;
pub use key_agreement::KeyAgreement;
