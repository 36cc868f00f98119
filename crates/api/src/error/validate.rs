//! Validation helpers that produce the workspace error type

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate a DER structural condition
#[inline(always)]
pub fn decode(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::decode(context, reason));
    }
    Ok(())
}

/// Validate a PEM structural condition
#[inline(always)]
pub fn pem(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::pem(context, reason));
    }
    Ok(())
}

/// Validate that `requested` bytes can be read from `available`
#[inline(always)]
pub fn data_available(context: &'static str, requested: usize, available: usize) -> Result<()> {
    if requested > available {
        return Err(Error::OutOfData {
            context,
            requested,
            available,
        });
    }
    Ok(())
}

/// Validate that `requested` bytes can be written into `remaining`
#[inline(always)]
pub fn space_remaining(context: &'static str, requested: usize, remaining: usize) -> Result<()> {
    if requested > remaining {
        return Err(Error::OutOfSpace {
            context,
            requested,
            remaining,
        });
    }
    Ok(())
}

/// Validate a minimum bit length
#[inline(always)]
pub fn min_bits(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::param(
            context,
            format!("{} bits is below the minimum of {}", actual, min),
        ));
    }
    Ok(())
}
