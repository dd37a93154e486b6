//! Property-based tests for the B-163 group law

use kecdh_algorithms::ec::b163::{base_point_g, scalar_mult_base_g, Curve, Point, Scalar};
use proptest::prelude::*;

/// A point k*G for a random 64-bit k
fn curve_point() -> impl Strategy<Value = Point> {
    (1u64..).prop_map(|k| scalar_mult_base_g(&Scalar::from_u64(k)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn identity_is_neutral(p in curve_point()) {
        let curve = Curve::b163();
        let o = Point::identity();
        prop_assert_eq!(curve.add(&p, &o), p);
        prop_assert_eq!(curve.add(&o, &p), p);
    }

    #[test]
    fn point_plus_negation_is_identity(p in curve_point()) {
        let curve = Curve::b163();
        let neg = p.negate();
        prop_assert!(curve.is_on_curve(&neg));
        prop_assert!(curve.add(&p, &neg).is_identity());
    }

    #[test]
    fn adding_a_point_to_itself_doubles(p in curve_point()) {
        let curve = Curve::b163();
        prop_assert_eq!(curve.add(&p, &p), curve.double(&p));
    }

    #[test]
    fn group_operations_stay_on_curve(p in curve_point(), q in curve_point()) {
        let curve = Curve::b163();
        prop_assert!(curve.is_on_curve(&p));
        prop_assert!(curve.is_on_curve(&curve.double(&p)));
        prop_assert!(curve.is_on_curve(&curve.add(&p, &q)));
        prop_assert_eq!(curve.add(&p, &q), curve.add(&q, &p));
    }

    #[test]
    fn addition_is_associative(p in curve_point(), q in curve_point(), r in curve_point()) {
        let curve = Curve::b163();
        let left = curve.add(&curve.add(&p, &q), &r);
        let right = curve.add(&p, &curve.add(&q, &r));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn scalar_multiplication_is_additive(a in 1u32.., b in 1u32..) {
        let curve = Curve::b163();
        let g = base_point_g();
        let lhs = curve.mul(&g, &Scalar::from_u64(a as u64 + b as u64));
        let rhs = curve.add(
            &curve.mul(&g, &Scalar::from_u64(a as u64)),
            &curve.mul(&g, &Scalar::from_u64(b as u64)),
        );
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn point_encoding_is_exact(p in curve_point()) {
        prop_assert_eq!(Point::from_words(&p.to_words()), p);
        prop_assert_eq!(Point::from_bytes(&p.to_bytes()).unwrap(), p);
        prop_assert_eq!(Curve::b163().point(p.x(), p.y()).unwrap(), p);
    }
}
