//! Known-answer vectors for NIST B-163
//!
//! All values are six little-word-first 32-bit words. Multiples of the base
//! point were generated independently with a reference model of the group law.

use kecdh_algorithms::ec::b163::{FieldElement, Point, Scalar, B163_BITVEC_WORDS};

/// Words of one field element or scalar
pub type Words = [u32; B163_BITVEC_WORDS];

/// `k * G` for a fixed scalar `k`
#[derive(Debug, Clone, Copy)]
pub struct MultipleVector {
    /// The scalar, not reduced modulo `n`
    pub k: Words,
    /// Expected x-coordinate
    pub x: Words,
    /// Expected y-coordinate
    pub y: Words,
}

impl MultipleVector {
    /// Scalar as a library value
    pub fn scalar(&self) -> Scalar {
        Scalar::from_words(self.k)
    }

    /// Expected point as a library value
    pub fn point(&self) -> Point {
        Point::from_coordinates(
            FieldElement::from_words(&self.x),
            FieldElement::from_words(&self.y),
        )
    }
}

/// A complete two-party exchange with fixed private scalars
#[derive(Debug, Clone, Copy)]
pub struct ExchangeVector {
    /// Alice's scalar as supplied
    pub alice_secret: Words,
    /// Alice's scalar after key generation cleared the high bits
    pub alice_cleared: Words,
    /// Alice's public key, x then y
    pub alice_public: [Words; 2],
    /// Bob's scalar as supplied
    pub bob_secret: Words,
    /// Bob's public key, x then y
    pub bob_public: [Words; 2],
    /// The shared point, x then y
    pub shared: [Words; 2],
}

const IDENTITY: Words = [0; B163_BITVEC_WORDS];

/// Multiples of the base point, including scalars at and beyond the order
pub const BASE_MULTIPLES: &[MultipleVector] = &[
    MultipleVector {
        k: [1, 0, 0, 0, 0, 0],
        x: [0xe8343e36, 0xd4994637, 0xa0991168, 0x86a2d57e, 0xf0eba162, 0x00000003],
        y: [0x797324f1, 0xb11c5c0c, 0xa2cdd545, 0x71a0094f, 0xd51fbc6c, 0x00000000],
    },
    MultipleVector {
        k: [2, 0, 0, 0, 0, 0],
        x: [0x5bd4c2d4, 0xa66d5ab8, 0x0a0c561e, 0x9c49e020, 0xaeb33fed, 0x00000001],
        y: [0xc82895e8, 0x75fd625c, 0x4c200764, 0xcd47d0c2, 0x30608192, 0x00000005],
    },
    MultipleVector {
        k: [3, 0, 0, 0, 0, 0],
        x: [0xedd691fe, 0x906691f6, 0x009d6f9b, 0xf86aa315, 0x34000577, 0x00000006],
        y: [0xdc2230be, 0x3587bd45, 0xe6fba565, 0x6c2ec014, 0x01a3de0d, 0x00000004],
    },
    MultipleVector {
        k: [4, 0, 0, 0, 0, 0],
        x: [0x5d153f39, 0x3f4ff3b7, 0x88d3e762, 0xccd84af8, 0x053748c8, 0x00000004],
        y: [0x11f5fda7, 0xcd169cc3, 0x53953b06, 0x9b6a8381, 0x4b090894, 0x00000006],
    },
    MultipleVector {
        k: [5, 0, 0, 0, 0, 0],
        x: [0xa449f864, 0x2764867d, 0x4c657bb5, 0x3630522f, 0x20589968, 0x00000007],
        y: [0x3550cb9c, 0x007af301, 0xdb01ca79, 0x5dada096, 0x02537ff5, 0x00000003],
    },
    MultipleVector {
        k: [7, 0, 0, 0, 0, 0],
        x: [0xad87b13a, 0x1a0cf6ab, 0x3eb105b3, 0xea5a8c0a, 0x3eaaaf4b, 0x00000004],
        y: [0x7289a17f, 0x932b0bd2, 0x6c988c7a, 0xa9d7fd43, 0xfad8ce53, 0x00000005],
    },
    MultipleVector {
        k: [10, 0, 0, 0, 0, 0],
        x: [0xcaa10915, 0x3c9313e7, 0x6914c218, 0x0f581b0d, 0x07e54141, 0x00000005],
        y: [0x22748341, 0x97e25f1b, 0xd20961bb, 0x69d3efdb, 0x03c6d2de, 0x00000003],
    },
    MultipleVector {
        k: [0xdeadbeef, 0, 0, 0, 0, 0],
        x: [0x809d5e37, 0x4ade5a99, 0xa7c85741, 0x02546252, 0xd4f43607, 0x00000002],
        y: [0x4c4ccb1d, 0x48ac006e, 0x1b0b105c, 0x4b6e8da7, 0x949616aa, 0x00000003],
    },
    // 2^100 + 1
    MultipleVector {
        k: [1, 0, 0, 0x10, 0, 0],
        x: [0x85ccb3b3, 0xc41557eb, 0x4b09d6ab, 0x61ec9e9e, 0x869598b2, 0x00000005],
        y: [0xade1be71, 0xb14179cd, 0x551577ed, 0xa183c672, 0x1c6c5b1f, 0x00000006],
    },
    // n - 1 gives -G
    MultipleVector {
        k: [0xa4234c32, 0x77e70c12, 0x000292fe, 0, 0, 4],
        x: [0xe8343e36, 0xd4994637, 0xa0991168, 0x86a2d57e, 0xf0eba162, 0x00000003],
        y: [0x91471ac7, 0x65851a3b, 0x0254c42d, 0xf702dc31, 0x25f41d0e, 0x00000003],
    },
    // n
    MultipleVector {
        k: [0xa4234c33, 0x77e70c12, 0x000292fe, 0, 0, 4],
        x: IDENTITY,
        y: IDENTITY,
    },
    // n + 1
    MultipleVector {
        k: [0xa4234c34, 0x77e70c12, 0x000292fe, 0, 0, 4],
        x: [0xe8343e36, 0xd4994637, 0xa0991168, 0x86a2d57e, 0xf0eba162, 0x00000003],
        y: [0x797324f1, 0xb11c5c0c, 0xa2cdd545, 0x71a0094f, 0xd51fbc6c, 0x00000000],
    },
    // 2n + 3, a 164-bit scalar
    MultipleVector {
        k: [0x48469869, 0xefce1825, 0x000525fc, 0, 0, 8],
        x: [0xedd691fe, 0x906691f6, 0x009d6f9b, 0xf86aa315, 0x34000577, 0x00000006],
        y: [0xdc2230be, 0x3587bd45, 0xe6fba565, 0x6c2ec014, 0x01a3de0d, 0x00000004],
    },
];

/// Fixed exchange between two parties
pub const EXCHANGE: ExchangeVector = ExchangeVector {
    alice_secret: [0x9f2a6d31, 0x3c1b8e47, 0xa5d0f912, 0x7e64c3b8, 0x12f08ad5, 0xfffffffd],
    alice_cleared: [0x9f2a6d31, 0x3c1b8e47, 0xa5d0f912, 0x7e64c3b8, 0x12f08ad5, 0x00000005],
    alice_public: [
        [0x0637cb91, 0xacbc13a3, 0xe7d2282a, 0x1f68bd4d, 0x06589100, 0x00000004],
        [0x10b7108a, 0xb620d446, 0xb932990b, 0xaa36826f, 0x0c7e700e, 0x00000001],
    ],
    bob_secret: [0x0badc0de, 0x5eed1234, 0xc001d00d, 0x8badf00d, 0xfeedface, 0x00000003],
    bob_public: [
        [0xed373a5b, 0x25890e28, 0xf90dd12a, 0x6457a185, 0x1761927e, 0x00000001],
        [0x20fd12ce, 0x8aa2fa1f, 0x94feb526, 0x78e0b5b9, 0x4e9d54bb, 0x00000006],
    ],
    shared: [
        [0x67345c20, 0x2bb6ae34, 0xb616c1fa, 0x55917c0d, 0xbe7f159c, 0x00000007],
        [0xc7e160a1, 0x0c4f0e9d, 0x53f5c41f, 0x530a335d, 0x8533fdee, 0x00000007],
    ],
};

/// Concatenate x and y words into the twelve-word point layout
pub fn point_words(coords: &[Words; 2]) -> [u32; 2 * B163_BITVEC_WORDS] {
    let mut out = [0u32; 2 * B163_BITVEC_WORDS];
    out[..B163_BITVEC_WORDS].copy_from_slice(&coords[0]);
    out[B163_BITVEC_WORDS..].copy_from_slice(&coords[1]);
    out
}
