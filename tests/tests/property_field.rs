//! Property-based tests for GF(2^163) arithmetic

use kecdh_algorithms::ec::b163::{FieldElement, B163_FIELD_DEGREE};
use proptest::prelude::*;

/// Arbitrary field element; words are masked to 163 bits on construction
fn field_element() -> impl Strategy<Value = FieldElement> {
    any::<[u32; 6]>().prop_map(|w| FieldElement::from_words(&w))
}

fn nonzero_field_element() -> impl Strategy<Value = FieldElement> {
    field_element().prop_filter("non-zero", |e| !e.is_zero())
}

proptest! {
    #[test]
    fn addition_is_an_involution(a in field_element(), b in field_element()) {
        prop_assert_eq!(a.add(&b).add(&b), a);
        prop_assert!(a.add(&a).is_zero());
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn multiplication_is_closed(a in field_element(), b in field_element()) {
        let product = a.mul(&b);
        prop_assert!(product.degree() <= B163_FIELD_DEGREE);
        prop_assert_eq!(product, b.mul(&a));
    }

    #[test]
    fn multiplication_identities(a in field_element()) {
        prop_assert_eq!(a.mul(&FieldElement::one()), a);
        prop_assert!(a.mul(&FieldElement::zero()).is_zero());
        prop_assert_eq!(a.square(), a.mul(&a));
    }

    #[test]
    fn multiplication_distributes(
        a in field_element(),
        b in field_element(),
        c in field_element()
    ) {
        prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
    }

    #[test]
    fn inverse_law(a in nonzero_field_element()) {
        let inv = a.invert();
        prop_assert!(inv.degree() <= B163_FIELD_DEGREE);
        prop_assert!(a.mul(&inv).is_one());
        prop_assert_eq!(inv.invert(), a);
    }

    #[test]
    fn division_undoes_multiplication(a in field_element(), b in nonzero_field_element()) {
        prop_assert_eq!(a.mul(&b).div(&b), a);
    }

    #[test]
    fn byte_encoding_is_canonical(a in field_element()) {
        let bytes = a.to_bytes();
        prop_assert_eq!(FieldElement::from_bytes(&bytes).unwrap(), a);
        prop_assert_eq!(FieldElement::from_words(&a.to_words()), a);
    }
}
