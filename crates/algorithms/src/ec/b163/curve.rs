//! Group law on binary curves `y² + xy = x³ + ax² + b`
//!
//! A [`Curve`] carries its parameters as an immutable value, so the
//! arithmetic never reads process-wide state. [`Curve::b163`] is the only
//! curve the crate ships.

use crate::ec::b163::constants::{B163_COEFF_A, B163_COFACTOR};
use crate::ec::b163::field::FieldElement;
use crate::ec::b163::point::Point;
use crate::ec::b163::scalar::Scalar;
use crate::error::{validate, Result};
use kecdh_params::traditional::ecdh::{B163_BASE_X, B163_BASE_Y, B163_COEFF_B, B163_ORDER};

/// Domain parameters of a binary curve over GF(2^163)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Linear coefficient, 0 or 1
    pub coeff_a: u32,
    /// Constant coefficient, nonzero
    pub coeff_b: FieldElement,
    /// Base point x-coordinate
    pub base_x: FieldElement,
    /// Base point y-coordinate
    pub base_y: FieldElement,
    /// Order of the base point, as little-word-first words
    pub order: [u32; 6],
    /// Cofactor. Not used by the arithmetic.
    pub cofactor: u32,
}

/// NIST B-163 domain parameters
pub const B163: CurveParams = CurveParams {
    coeff_a: B163_COEFF_A,
    coeff_b: FieldElement::from_reduced_words(B163_COEFF_B),
    base_x: FieldElement::from_reduced_words(B163_BASE_X),
    base_y: FieldElement::from_reduced_words(B163_BASE_Y),
    order: B163_ORDER,
    cofactor: B163_COFACTOR,
};

/// Point arithmetic closed over a fixed set of curve parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Curve {
    params: CurveParams,
}

impl Curve {
    /// The B-163 curve
    pub const fn b163() -> Self {
        Curve { params: B163 }
    }

    /// Build a curve from arbitrary parameters.
    ///
    /// Fails unless `a ∈ {0, 1}`, `b ≠ 0` (required by the identity
    /// encoding) and the base point satisfies the curve equation.
    pub fn new(params: CurveParams) -> Result<Self> {
        validate::parameter(params.coeff_a <= 1, "coeff_a", "must be 0 or 1")?;
        validate::parameter(!params.coeff_b.is_zero(), "coeff_b", "must be nonzero")?;
        let curve = Curve { params };
        validate::parameter(
            curve.is_on_curve(&curve.base_point()) && !curve.base_point().is_identity(),
            "base point",
            "does not satisfy the curve equation",
        )?;
        Ok(curve)
    }

    /// The parameters this curve was built from
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// The base point `G`
    pub fn base_point(&self) -> Point {
        Point::from_coordinates(self.params.base_x, self.params.base_y)
    }

    /// The order `n` of the base point
    pub fn order(&self) -> Scalar {
        Scalar::from_words(self.params.order)
    }

    /// Create a point, checking it satisfies the curve equation
    pub fn point(&self, x: &FieldElement, y: &FieldElement) -> Result<Point> {
        let p = Point::from_coordinates(*x, *y);
        validate::parameter(
            !p.is_identity() && self.is_on_curve(&p),
            "B163 point",
            "coordinates do not satisfy the curve equation",
        )?;
        Ok(p)
    }

    /// `v + a`
    fn add_a(&self, v: &FieldElement) -> FieldElement {
        if self.params.coeff_a == 1 {
            v.increment()
        } else {
            *v
        }
    }

    /// Whether `p` is the identity or satisfies `y² + xy = x³ + ax² + b`
    pub fn is_on_curve(&self, p: &Point) -> bool {
        if p.is_identity() {
            return true;
        }
        let x_sq = p.x.square();
        let ax_sq = if self.params.coeff_a == 1 {
            x_sq
        } else {
            FieldElement::zero()
        };
        let rhs = x_sq.mul(&p.x).add(&ax_sq).add(&self.params.coeff_b);
        let lhs = p.y.square().add(&p.x.mul(&p.y));
        lhs == rhs
    }

    /// `2P`
    pub fn double(&self, p: &Point) -> Point {
        // Covers the identity and the single point of order two
        if p.x.is_zero() {
            return Point::identity();
        }

        let lambda = p.x.add(&p.y.div(&p.x));
        let x2 = self.add_a(&lambda.square().add(&lambda));
        let y2 = p.x.square().add(&lambda.increment().mul(&x2));
        Point::from_coordinates(x2, y2)
    }

    /// `P + Q`
    pub fn add(&self, p: &Point, q: &Point) -> Point {
        if q.is_identity() {
            return *p;
        }
        if p.is_identity() {
            return *q;
        }

        if p.x == q.x {
            if p.y == q.y {
                return self.double(p);
            }
            return Point::identity();
        }

        let x_sum = p.x.add(&q.x);
        let lambda = p.y.add(&q.y).div(&x_sum);
        let x3 = self.add_a(&lambda.square().add(&lambda).add(&x_sum));
        let y3 = lambda.mul(&p.x.add(&x3)).add(&x3).add(&p.y);
        Point::from_coordinates(x3, y3)
    }

    /// `kP` by left-to-right double-and-add.
    ///
    /// Runs one doubling per bit of `k` and branches on its bits, so the
    /// timing depends on the scalar.
    pub fn mul(&self, p: &Point, k: &Scalar) -> Point {
        let mut acc = Point::identity();
        for i in (0..k.degree()).rev() {
            acc = self.double(&acc);
            if k.bit(i) {
                acc = self.add(&acc, p);
            }
        }
        acc
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::b163()
    }
}
