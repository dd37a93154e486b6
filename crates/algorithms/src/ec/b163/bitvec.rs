//! Fixed-capacity bit vectors over GF(2)
//!
//! A [`BitVec`] is a binary polynomial stored as little-word-first `u32`
//! words. The capacity is the field degree plus a small margin so that a
//! single left shift of a reduced element never loses its top bit.

use crate::ec::b163::constants::{B163_BITVEC_NBITS, B163_BITVEC_WORDS};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

const WORD_BITS: usize = 32;

/// A binary polynomial of bounded degree
#[derive(Clone, Copy, Debug, Default, Zeroize)]
pub struct BitVec {
    words: [u32; B163_BITVEC_WORDS],
}

impl BitVec {
    /// Bit capacity: every index below this may be read or written
    pub const CAPACITY: usize = B163_BITVEC_WORDS * WORD_BITS;

    /// The zero polynomial
    pub const fn zero() -> Self {
        BitVec {
            words: [0; B163_BITVEC_WORDS],
        }
    }

    /// The constant polynomial 1
    pub const fn one() -> Self {
        let mut words = [0; B163_BITVEC_WORDS];
        words[0] = 1;
        BitVec { words }
    }

    /// Wrap raw words without masking
    pub const fn from_words(words: [u32; B163_BITVEC_WORDS]) -> Self {
        BitVec { words }
    }

    /// Raw words, least-significant first
    pub const fn words(&self) -> &[u32; B163_BITVEC_WORDS] {
        &self.words
    }

    /// Value of bit `idx` as 0 or 1.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`BitVec::CAPACITY`].
    #[inline]
    pub fn get_bit(&self, idx: usize) -> u32 {
        assert!(idx < Self::CAPACITY, "bit index {} out of range", idx);
        (self.words[idx / WORD_BITS] >> (idx % WORD_BITS)) & 1
    }

    /// Set bit `idx` to 1.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`BitVec::CAPACITY`].
    #[inline]
    pub fn set_bit(&mut self, idx: usize) {
        assert!(idx < Self::CAPACITY, "bit index {} out of range", idx);
        self.words[idx / WORD_BITS] |= 1 << (idx % WORD_BITS);
    }

    /// Clear bit `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`BitVec::CAPACITY`].
    #[inline]
    pub fn clear_bit(&mut self, idx: usize) {
        assert!(idx < Self::CAPACITY, "bit index {} out of range", idx);
        self.words[idx / WORD_BITS] &= !(1 << (idx % WORD_BITS));
    }

    /// Whether every bit is zero
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Whether this is the constant polynomial 1
    pub fn is_one(&self) -> bool {
        self.words[0] == 1 && self.words[1..].iter().all(|&w| w == 0)
    }

    /// Index of the highest set bit plus one; zero for the zero polynomial.
    ///
    /// Scans whole zero words from the top, then the bits of the first
    /// non-zero word.
    pub fn degree(&self) -> usize {
        let mut top = B163_BITVEC_WORDS;
        while top > 0 && self.words[top - 1] == 0 {
            top -= 1;
        }
        if top == 0 {
            return 0;
        }
        let word = self.words[top - 1];
        (top - 1) * WORD_BITS + (WORD_BITS - word.leading_zeros() as usize)
    }

    /// `self` shifted left by `nbits` within the fixed capacity.
    ///
    /// Bits pushed past [`BitVec::CAPACITY`] are discarded.
    pub fn shift_left(&self, nbits: usize) -> Self {
        let mut out = [0u32; B163_BITVEC_WORDS];
        let word_shift = nbits / WORD_BITS;
        let bit_shift = nbits % WORD_BITS;
        if word_shift >= B163_BITVEC_WORDS {
            return BitVec { words: out };
        }

        out[word_shift..].copy_from_slice(&self.words[..B163_BITVEC_WORDS - word_shift]);

        if bit_shift != 0 {
            for i in (1..B163_BITVEC_WORDS).rev() {
                out[i] = (out[i] << bit_shift) | (out[i - 1] >> (WORD_BITS - bit_shift));
            }
            out[0] <<= bit_shift;
        }
        BitVec { words: out }
    }

    /// Word-wise XOR
    pub fn xor(&self, other: &Self) -> Self {
        let mut out = self.words;
        for (o, w) in out.iter_mut().zip(other.words.iter()) {
            *o ^= *w;
        }
        BitVec { words: out }
    }

    /// Keep only the low `nbits` bits
    pub fn truncate(&self, nbits: usize) -> Self {
        let mut out = *self;
        for idx in nbits.min(Self::CAPACITY)..Self::CAPACITY {
            out.clear_bit(idx);
        }
        out
    }

    /// Exchange the contents of two vectors
    pub fn swap(a: &mut Self, b: &mut Self) {
        core::mem::swap(&mut a.words, &mut b.words);
    }
}

impl ConstantTimeEq for BitVec {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.words[..].ct_eq(&other.words[..])
    }
}

impl PartialEq for BitVec {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for BitVec {}

const _: () = assert!(B163_BITVEC_NBITS <= B163_BITVEC_WORDS * WORD_BITS);
