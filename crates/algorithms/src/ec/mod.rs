//! Elliptic Curve Primitives
//!
//! Binary-field curves in affine coordinates. The only curve provided is
//! NIST B-163 over GF(2^163).

pub mod b163;

pub use b163::{
    Curve as B163Curve, FieldElement as B163FieldElement, Point as B163Point,
    Scalar as B163Scalar,
};
