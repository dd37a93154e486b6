//! Binary-field elliptic curve primitives
//!
//! This crate provides the arithmetic stack beneath the kecdh key exchange:
//! fixed-capacity binary polynomials, GF(2^163) field operations, and
//! affine point arithmetic on the NIST B-163 curve.
//!
//! None of the operations are constant-time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{b163, B163Curve, B163FieldElement, B163Point, B163Scalar};
