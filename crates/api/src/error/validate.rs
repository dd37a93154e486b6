//! Validation helpers returning API errors

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter { context, reason });
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a peer public key condition
#[inline(always)]
pub fn peer_key(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPeerKey { context, reason });
    }
    Ok(())
}

/// Validate that a scalar meets the minimum bit-length
#[inline(always)]
pub fn entropy(context: &'static str, degree: usize, required: usize) -> Result<()> {
    if degree < required {
        return Err(Error::InsufficientEntropy {
            context,
            degree,
            required,
        });
    }
    Ok(())
}
