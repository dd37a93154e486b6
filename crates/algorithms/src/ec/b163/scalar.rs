//! B-163 scalar values

use crate::ec::b163::bitvec::BitVec;
use crate::ec::b163::constants::{B163_BITVEC_WORDS, B163_SCALAR_SIZE};
use crate::error::{validate, Result};
use byteorder::{ByteOrder, LittleEndian};
use kecdh_params::traditional::ecdh::B163_ORDER;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A multiplier for point arithmetic, such as a private key.
///
/// Stored as the raw words it was built from: no bits are masked and no
/// reduction modulo the group order takes place.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar(BitVec);

impl Scalar {
    /// Create a scalar from little-word-first words
    pub fn from_words(words: [u32; B163_BITVEC_WORDS]) -> Self {
        Scalar(BitVec::from_words(words))
    }

    /// Create a scalar from a small integer
    pub fn from_u64(value: u64) -> Self {
        let mut words = [0u32; B163_BITVEC_WORDS];
        words[0] = value as u32;
        words[1] = (value >> 32) as u32;
        Scalar(BitVec::from_words(words))
    }

    /// Decode from the little-endian serialization of the words
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("B163 scalar", bytes.len(), B163_SCALAR_SIZE)?;
        let mut words = [0u32; B163_BITVEC_WORDS];
        LittleEndian::read_u32_into(bytes, &mut words);
        Ok(Self::from_words(words))
    }

    /// The order `n` of the base point
    pub fn order() -> Self {
        Scalar(BitVec::from_words(B163_ORDER))
    }

    /// Little-word-first words
    pub fn to_words(&self) -> [u32; B163_BITVEC_WORDS] {
        *self.0.words()
    }

    /// Little-endian serialization of the words
    pub fn to_bytes(&self) -> [u8; B163_SCALAR_SIZE] {
        let mut out = [0u8; B163_SCALAR_SIZE];
        LittleEndian::write_u32_into(self.0.words(), &mut out);
        out
    }

    /// Check if this scalar is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Bit-length: index of the highest set bit plus one
    pub fn degree(&self) -> usize {
        self.0.degree()
    }

    /// Whether bit `idx` is set.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is outside the scalar's capacity.
    pub fn bit(&self, idx: usize) -> bool {
        self.0.get_bit(idx) == 1
    }

    /// Clear every bit at index `from` and above
    pub fn clear_bits_from(&mut self, from: usize) {
        self.0 = self.0.truncate(from);
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Scalar {}

impl core::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar([REDACTED])")
    }
}
