//! Public API traits and types for the kecdh library
//!
//! This crate provides the public API surface shared by the kecdh crates:
//! the error type returned by every fallible protocol operation and the
//! [`KeyAgreement`] trait implemented by concrete key-exchange schemes.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::KeyAgreement;
