//! Error handling for the dstuffer workspace

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

// Re-export validation utilities module
pub use validate as validation;

// Specialized result types for different operations
pub type BufferResult<T> = Result<T>;
pub type DecodeResult<T> = Result<T>;
pub type EntropyResult<T> = Result<T>;
