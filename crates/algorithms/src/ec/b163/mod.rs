//! NIST B-163 Elliptic Curve Primitives
//!
//! This module implements the B-163 binary elliptic curve operations.
//! The curve equation is y² + xy = x³ + x² + b over the binary field GF(2^163).
//! - Field polynomial: x^163 + x^7 + x^6 + x^3 + 1
//! - The curve order n = 0x040000000000000000000292FE77E70C12A4234C33, cofactor 2
//!
//! Field elements and scalars are stored as six little-word-first 32-bit words
//! (192 bits: 163 significant bits plus headroom for intermediate shifts).
//!
//! Operations are NOT constant-time: scalar multiplication branches on scalar
//! bits and inversion branches on operand degrees.

mod bitvec;
mod constants;
mod curve;
mod field;
mod point;
mod scalar;

pub use bitvec::BitVec;
pub use constants::{
    B163_BITVEC_NBITS, B163_BITVEC_WORDS, B163_FIELD_DEGREE, B163_FIELD_ELEMENT_SIZE,
    B163_POINT_SIZE, B163_POINT_WORDS, B163_SCALAR_SIZE,
};
pub use curve::{Curve, CurveParams, B163};
pub use field::FieldElement;
pub use point::Point;
pub use scalar::Scalar;

/// Get the standard base point G of the B-163 curve
pub fn base_point_g() -> Point {
    Curve::b163().base_point()
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    let curve = Curve::b163();
    curve.mul(&curve.base_point(), scalar)
}

/// General scalar multiplication: compute scalar * point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    if point.is_identity() {
        return Point::identity();
    }
    Curve::b163().mul(point, scalar)
}
