//! Constants for Elliptic Curve Diffie-Hellman over NIST B-163
//!
//! The curve is `y² + xy = x³ + x² + b` over GF(2^163), reduced by
//! `f(x) = x^163 + x^7 + x^6 + x^3 + 1`.
//! Values are taken from FIPS 186-3 and SEC 2.

/// Degree `m` of the binary field
pub const B163_FIELD_DEGREE: usize = 163;

/// Extra bits of headroom in a bit vector, absorbing the overflow of a single left shift
pub const B163_BITVEC_MARGIN: usize = 3;

/// Bits per storage word
pub const B163_WORD_BITS: usize = 32;

/// Number of 32-bit words in a bit vector: ceil((163 + 3) / 32)
pub const B163_BITVEC_WORDS: usize =
    (B163_FIELD_DEGREE + B163_BITVEC_MARGIN + B163_WORD_BITS - 1) / B163_WORD_BITS;

/// Linear coefficient `a`
pub const B163_COEFF_A: u32 = 1;

/// Cofactor `h` of the base point subgroup. Informational only.
pub const B163_COFACTOR: u32 = 2;

/// Reduction polynomial `x^163 + x^7 + x^6 + x^3 + 1`
pub const B163_POLYNOMIAL: [u32; B163_BITVEC_WORDS] =
    [0x0000_00c9, 0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0008];

/// Constant coefficient `b`
pub const B163_COEFF_B: [u32; B163_BITVEC_WORDS] =
    [0x4a32_05fd, 0x512f_7874, 0x1481_eb10, 0xb8c9_53ca, 0x0a60_1907, 0x0000_0002];

/// x-coordinate of the base point `G`
pub const B163_BASE_X: [u32; B163_BITVEC_WORDS] =
    [0xe834_3e36, 0xd499_4637, 0xa099_1168, 0x86a2_d57e, 0xf0eb_a162, 0x0000_0003];

/// y-coordinate of the base point `G`
pub const B163_BASE_Y: [u32; B163_BITVEC_WORDS] =
    [0x7973_24f1, 0xb11c_5c0c, 0xa2cd_d545, 0x71a0_094f, 0xd51f_bc6c, 0x0000_0000];

/// Prime order `n` of the base point
pub const B163_ORDER: [u32; B163_BITVEC_WORDS] =
    [0xa423_4c33, 0x77e7_0c12, 0x0002_92fe, 0x0000_0000, 0x0000_0000, 0x0000_0004];

/// Size of a serialized field element in bytes (6 little-endian words)
pub const B163_FIELD_ELEMENT_SIZE: usize = B163_BITVEC_WORDS * 4;

/// Size of a serialized private scalar in bytes
pub const B163_SCALAR_SIZE: usize = B163_FIELD_ELEMENT_SIZE;

/// Number of words in an encoded point: x words followed by y words
pub const B163_POINT_WORDS: usize = 2 * B163_BITVEC_WORDS;

/// Size of a serialized point in bytes
pub const B163_POINT_SIZE: usize = 2 * B163_FIELD_ELEMENT_SIZE;

/// Size of a public key for ECDH-B163 in bytes
pub const ECDH_B163_PUBLIC_KEY_SIZE: usize = B163_POINT_SIZE;

/// Size of a private key for ECDH-B163 in bytes
pub const ECDH_B163_PRIVATE_KEY_SIZE: usize = B163_SCALAR_SIZE;

/// Size of a shared secret for ECDH-B163 in bytes (the full shared point)
pub const ECDH_B163_SHARED_SECRET_SIZE: usize = B163_POINT_SIZE;
