//! B-163 elliptic curve points in affine coordinates

use crate::ec::b163::constants::{
    B163_BITVEC_WORDS, B163_FIELD_ELEMENT_SIZE, B163_POINT_SIZE, B163_POINT_WORDS,
};
use crate::ec::b163::curve::Curve;
use crate::ec::b163::field::FieldElement;
use crate::error::{validate, Result};
use zeroize::Zeroize;

/// A point on a binary curve `y² + xy = x³ + ax² + b`.
///
/// The identity (point at infinity) is encoded as `(0, 0)`. That pair never
/// satisfies the curve equation because `b ≠ 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct Point {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl Point {
    /// Create a point from coordinates, checking it lies on B-163
    pub fn new(x: &FieldElement, y: &FieldElement) -> Result<Self> {
        Curve::b163().point(x, y)
    }

    /// Create a point from coordinates without any validation.
    ///
    /// Use [`Curve::is_on_curve`] before doing arithmetic on the result.
    pub const fn from_coordinates(x: FieldElement, y: FieldElement) -> Self {
        Point { x, y }
    }

    /// The identity element
    pub const fn identity() -> Self {
        Point {
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Check if this point is the identity element
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// The x-coordinate
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// The y-coordinate
    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// The additive inverse `(x, x + y)`
    pub fn negate(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        Point {
            x: self.x,
            y: self.x.add(&self.y),
        }
    }

    /// Encode as x words followed by y words
    pub fn to_words(&self) -> [u32; B163_POINT_WORDS] {
        let mut out = [0u32; B163_POINT_WORDS];
        out[..B163_BITVEC_WORDS].copy_from_slice(&self.x.to_words());
        out[B163_BITVEC_WORDS..].copy_from_slice(&self.y.to_words());
        out
    }

    /// Decode x words followed by y words without curve validation.
    ///
    /// Bits above bit 162 of either coordinate are ignored.
    pub fn from_words(words: &[u32; B163_POINT_WORDS]) -> Self {
        let mut x = [0u32; B163_BITVEC_WORDS];
        let mut y = [0u32; B163_BITVEC_WORDS];
        x.copy_from_slice(&words[..B163_BITVEC_WORDS]);
        y.copy_from_slice(&words[B163_BITVEC_WORDS..]);
        Point {
            x: FieldElement::from_words(&x),
            y: FieldElement::from_words(&y),
        }
    }

    /// Serialize as the little-endian bytes of [`Point::to_words`]
    pub fn to_bytes(&self) -> [u8; B163_POINT_SIZE] {
        let mut out = [0u8; B163_POINT_SIZE];
        out[..B163_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x.to_bytes());
        out[B163_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// Deserialize from [`Point::to_bytes`] output without curve validation
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("B163 point", bytes.len(), B163_POINT_SIZE)?;
        Ok(Point {
            x: FieldElement::from_bytes(&bytes[..B163_FIELD_ELEMENT_SIZE])?,
            y: FieldElement::from_bytes(&bytes[B163_FIELD_ELEMENT_SIZE..])?,
        })
    }
}
