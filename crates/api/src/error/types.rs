//! Error type definitions for key-exchange operations

use thiserror::Error as ThisError;

/// Primary error type for key-exchange operations
///
/// `InsufficientEntropy` and `InvalidPeerKey` are the protocol rejections a
/// caller is expected to handle: resample the private scalar, or abort the
/// exchange with that peer. The remaining variants report malformed input.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A candidate private scalar has too few significant bits
    #[error("Insufficient entropy in {context}: scalar has {degree} significant bits, need at least {required}")]
    InsufficientEntropy {
        /// Operation that rejected the scalar
        context: &'static str,
        /// Bit-length of the rejected scalar
        degree: usize,
        /// Minimum accepted bit-length
        required: usize,
    },

    /// A peer public key is the identity or does not lie on the curve
    #[error("Invalid peer key for {context}: {reason}")]
    InvalidPeerKey {
        /// Operation that rejected the key
        context: &'static str,
        /// Why the key was rejected
        reason: &'static str,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Where the length mismatch occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        context: &'static str,
        /// Why it is invalid
        reason: &'static str,
    },
}

/// Result type for key-exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InsufficientEntropy {
                degree, required, ..
            } => Self::InsufficientEntropy {
                context,
                degree,
                required,
            },
            Self::InvalidPeerKey { reason, .. } => Self::InvalidPeerKey { context, reason },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { reason, .. } => Self::InvalidParameter { context, reason },
        }
    }

    /// Whether this error is a protocol rejection rather than malformed input
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InsufficientEntropy { .. } | Self::InvalidPeerKey { .. }
        )
    }
}
