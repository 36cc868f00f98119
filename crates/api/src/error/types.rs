//! Error type definitions for buffer, decoding and entropy operations

use thiserror::Error as ThisError;

/// Primary error type for the dstuffer workspace
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A write would exceed the capacity of a fixed-size buffer
    #[error("{context}: out of space (requested {requested}, remaining {remaining})")]
    OutOfSpace {
        context: &'static str,
        requested: usize,
        remaining: usize,
    },

    /// A read asked for more bytes than are available
    #[error("{context}: out of data (requested {requested}, available {available})")]
    OutOfData {
        context: &'static str,
        requested: usize,
        available: usize,
    },

    /// Missing PEM markers or invalid base64 body
    #[error("Malformed PEM: {context}: {reason}")]
    MalformedPem {
        context: &'static str,
        reason: &'static str,
    },

    /// Invalid DER / ASN.1 structure
    #[error("Decode error: {context}: {reason}")]
    DecodeError {
        context: &'static str,
        reason: &'static str,
    },

    /// The entropy provider could not supply the requested bytes
    #[error("Entropy source failure: {source_name}: {message}")]
    EntropySourceFailure {
        source_name: &'static str,
        message: String,
    },

    /// Operation attempted before initialization or after teardown
    #[error("Invalid state: {context}: {state}")]
    InvalidState {
        context: &'static str,
        state: &'static str,
    },

    /// Parameters or peer values rejected by the backend
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for dstuffer operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context label of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::OutOfSpace { requested, remaining, .. } => Self::OutOfSpace {
                context,
                requested,
                remaining,
            },
            Self::OutOfData { requested, available, .. } => Self::OutOfData {
                context,
                requested,
                available,
            },
            Self::MalformedPem { reason, .. } => Self::MalformedPem { context, reason },
            Self::DecodeError { reason, .. } => Self::DecodeError { context, reason },
            Self::EntropySourceFailure { source_name, message } => {
                Self::EntropySourceFailure { source_name, message }
            }
            Self::InvalidState { state, .. } => Self::InvalidState { context, state },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// Shorthand for a `DecodeError`
    pub fn decode(context: &'static str, reason: &'static str) -> Self {
        Self::DecodeError { context, reason }
    }

    /// Shorthand for a `MalformedPem`
    pub fn pem(context: &'static str, reason: &'static str) -> Self {
        Self::MalformedPem { context, reason }
    }

    /// Shorthand for an `InvalidParameter`
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// True for the two buffer bounds violations
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfSpace { .. } | Self::OutOfData { .. })
    }
}
