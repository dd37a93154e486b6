//! Shared constants for B-163 operations

pub use kecdh_params::traditional::ecdh::{
    B163_BITVEC_MARGIN, B163_BITVEC_WORDS, B163_COEFF_A, B163_COFACTOR, B163_FIELD_DEGREE,
    B163_FIELD_ELEMENT_SIZE, B163_POINT_SIZE, B163_POINT_WORDS, B163_SCALAR_SIZE,
};

/// Significant bits a bit vector must be able to hold
pub const B163_BITVEC_NBITS: usize = B163_FIELD_DEGREE + B163_BITVEC_MARGIN;
