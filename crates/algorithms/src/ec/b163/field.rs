//! Arithmetic in GF(2^163)
//!
//! Elements are binary polynomials reduced modulo
//! `f(x) = x^163 + x^7 + x^6 + x^3 + 1`. Addition is XOR; multiplication is a
//! shift-and-add over the bits of one operand with a reduction after every
//! shift; inversion is the extended binary Euclidean algorithm.

use crate::ec::b163::bitvec::BitVec;
use crate::ec::b163::constants::{B163_BITVEC_WORDS, B163_FIELD_DEGREE, B163_FIELD_ELEMENT_SIZE};
use crate::error::{validate, Result};
use byteorder::{ByteOrder, LittleEndian};
use kecdh_params::traditional::ecdh::B163_POLYNOMIAL;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// An element of GF(2^163).
///
/// The value always fits in the low 163 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct FieldElement(BitVec);

impl FieldElement {
    /// The reduction polynomial `f(x)`. Not itself a reduced element.
    pub(crate) const MODULUS: BitVec = BitVec::from_words(B163_POLYNOMIAL);

    /// The additive identity
    pub const fn zero() -> Self {
        FieldElement(BitVec::zero())
    }

    /// The multiplicative identity
    pub const fn one() -> Self {
        FieldElement(BitVec::one())
    }

    /// Build an element from words that are already known to be reduced
    pub(crate) const fn from_reduced_words(words: [u32; B163_BITVEC_WORDS]) -> Self {
        FieldElement(BitVec::from_words(words))
    }

    /// Build an element from little-word-first words.
    ///
    /// Bits at index 163 and above are ignored.
    pub fn from_words(words: &[u32; B163_BITVEC_WORDS]) -> Self {
        FieldElement(BitVec::from_words(*words).truncate(B163_FIELD_DEGREE))
    }

    /// Little-word-first words; bits 163 and above are always zero
    pub fn to_words(&self) -> [u32; B163_BITVEC_WORDS] {
        *self.0.words()
    }

    /// Decode from the little-endian serialization of the words.
    ///
    /// Bits at index 163 and above are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("B163 field element", bytes.len(), B163_FIELD_ELEMENT_SIZE)?;
        let mut words = [0u32; B163_BITVEC_WORDS];
        LittleEndian::read_u32_into(bytes, &mut words);
        Ok(Self::from_words(&words))
    }

    /// Little-endian serialization of the words
    pub fn to_bytes(&self) -> [u8; B163_FIELD_ELEMENT_SIZE] {
        let mut out = [0u8; B163_FIELD_ELEMENT_SIZE];
        LittleEndian::write_u32_into(self.0.words(), &mut out);
        out
    }

    /// Whether this is the zero element
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whether this is the multiplicative identity
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Index of the highest set bit plus one
    pub fn degree(&self) -> usize {
        self.0.degree()
    }

    /// Field addition (and subtraction): `self + other`
    pub fn add(&self, other: &Self) -> Self {
        FieldElement(self.0.xor(&other.0))
    }

    /// `self + 1`
    pub fn increment(&self) -> Self {
        self.add(&Self::one())
    }

    /// Field multiplication: `self * other mod f(x)`
    pub fn mul(&self, other: &Self) -> Self {
        let mut acc = if other.0.get_bit(0) == 1 {
            self.0
        } else {
            BitVec::zero()
        };

        // t runs through self * x^i, reduced at every step
        let mut t = self.0;
        for i in 1..B163_FIELD_DEGREE {
            t = t.shift_left(1);
            if t.get_bit(B163_FIELD_DEGREE) == 1 {
                t = t.xor(&Self::MODULUS);
            }
            if other.0.get_bit(i) == 1 {
                acc = acc.xor(&t);
            }
        }
        FieldElement(acc)
    }

    /// `self * self`
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiplicative inverse.
    ///
    /// Keeps `u ≡ z·self` and `v ≡ g·self (mod f)`, cancelling the leading
    /// term of `u` against a shifted `v` until `u = 1`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero, which has no inverse.
    pub fn invert(&self) -> Self {
        assert!(!self.is_zero(), "inversion of zero in GF(2^163)");

        let mut u = self.0;
        let mut v = Self::MODULUS;
        let mut z = BitVec::one();
        let mut g = BitVec::zero();

        while !u.is_one() {
            let mut u_deg = u.degree();
            let mut v_deg = v.degree();
            if u_deg < v_deg {
                BitVec::swap(&mut u, &mut v);
                BitVec::swap(&mut z, &mut g);
                core::mem::swap(&mut u_deg, &mut v_deg);
            }
            let shift = u_deg - v_deg;
            u = u.xor(&v.shift_left(shift));
            z = z.xor(&g.shift_left(shift));
        }
        FieldElement(z)
    }

    /// `self / other`
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    pub fn div(&self, other: &Self) -> Self {
        self.mul(&other.invert())
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}
