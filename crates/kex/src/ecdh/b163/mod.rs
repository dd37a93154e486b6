//! ECDH with NIST B-163
//!
//! Key generation and shared-secret derivation over the B-163 binary curve.
//! Public keys and shared secrets are raw affine points: twelve 32-bit words,
//! x first, each coordinate little-word-first.
//!
//! Scalar validation follows a compatibility profile rather than a rigorous
//! one. A scalar is rejected when it has fewer than
//! [`ECDH_B163_MIN_SCALAR_BITS`] significant bits, and an accepted scalar has
//! every bit from the bit-length of the group order upward cleared. Neither
//! step reduces the scalar modulo `n`.

use kecdh_algorithms::ec::b163::{
    self as ec_b163, Curve, FieldElement, Point, Scalar, B163_BITVEC_WORDS, B163_FIELD_DEGREE,
    B163_POINT_WORDS,
};
use kecdh_api::error::validate;
use kecdh_api::{Error, KeyAgreement, Result, ResultExt};
use kecdh_params::traditional::ecdh::{
    ECDH_B163_PRIVATE_KEY_SIZE, ECDH_B163_PUBLIC_KEY_SIZE, ECDH_B163_SHARED_SECRET_SIZE,
};
use log::{debug, trace};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Smallest accepted bit-length of a private scalar: `2 * degree >= 163`
pub const ECDH_B163_MIN_SCALAR_BITS: usize = (B163_FIELD_DEGREE + 1) / 2;

const KEYGEN_CONTEXT: &str = "ECDH-B163 keypair";
const SHARED_SECRET_CONTEXT: &str = "ECDH-B163 shared secret";

/// ECDH with the B-163 curve
pub struct EcdhB163;

/// Private key for ECDH-B163 (scalar value)
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EcdhB163SecretKey(Scalar);

/// Public key for ECDH-B163 (affine point)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcdhB163PublicKey(Point);

/// Shared secret from ECDH-B163 (affine point)
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EcdhB163SharedSecret(Point);

impl EcdhB163SecretKey {
    /// Wrap caller-supplied words, typically drawn from a random source
    pub fn from_words(words: [u32; B163_BITVEC_WORDS]) -> Self {
        EcdhB163SecretKey(Scalar::from_words(words))
    }

    /// Decode from the little-endian serialization of the words
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length(KEYGEN_CONTEXT, bytes.len(), ECDH_B163_PRIVATE_KEY_SIZE)?;
        Ok(EcdhB163SecretKey(Scalar::from_bytes(bytes)?))
    }

    /// Little-word-first words
    pub fn to_words(&self) -> [u32; B163_BITVEC_WORDS] {
        self.0.to_words()
    }

    /// Little-endian serialization of the words
    pub fn to_bytes(&self) -> [u8; ECDH_B163_PRIVATE_KEY_SIZE] {
        self.0.to_bytes()
    }

    /// The underlying scalar
    pub fn scalar(&self) -> &Scalar {
        &self.0
    }
}

impl core::fmt::Debug for EcdhB163SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "EcdhB163SecretKey([REDACTED])")
    }
}

impl EcdhB163PublicKey {
    /// Decode x words followed by y words.
    ///
    /// No curve check happens here; [`derive_shared_secret`] rejects invalid keys.
    pub fn from_words(words: &[u32; B163_POINT_WORDS]) -> Self {
        EcdhB163PublicKey(Point::from_words(words))
    }

    /// Decode from the little-endian serialization of the words
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("ECDH-B163 public key", bytes.len(), ECDH_B163_PUBLIC_KEY_SIZE)?;
        Point::from_bytes(bytes)
            .map(EcdhB163PublicKey)
            .with_context("ECDH-B163 public key")
    }

    /// Build from raw coordinates
    pub fn from_coordinates(x: FieldElement, y: FieldElement) -> Self {
        EcdhB163PublicKey(Point::from_coordinates(x, y))
    }

    /// x words followed by y words
    pub fn to_words(&self) -> [u32; B163_POINT_WORDS] {
        self.0.to_words()
    }

    /// Little-endian serialization of the words
    pub fn to_bytes(&self) -> [u8; ECDH_B163_PUBLIC_KEY_SIZE] {
        self.0.to_bytes()
    }

    /// The underlying point
    pub fn point(&self) -> &Point {
        &self.0
    }
}

impl EcdhB163SharedSecret {
    /// x words followed by y words
    pub fn to_words(&self) -> [u32; B163_POINT_WORDS] {
        self.0.to_words()
    }

    /// Little-endian serialization of the words
    pub fn to_bytes(&self) -> [u8; ECDH_B163_SHARED_SECRET_SIZE] {
        self.0.to_bytes()
    }

    /// The underlying point
    pub fn point(&self) -> &Point {
        &self.0
    }
}

impl core::fmt::Debug for EcdhB163SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "EcdhB163SharedSecret([REDACTED])")
    }
}

/// Reject a scalar with fewer than [`ECDH_B163_MIN_SCALAR_BITS`] significant bits
fn check_entropy(scalar: &Scalar) -> Result<()> {
    let degree = scalar.degree();
    validate::entropy(KEYGEN_CONTEXT, degree, ECDH_B163_MIN_SCALAR_BITS).map_err(|e| {
        debug!("{}: rejected scalar with {} significant bits", KEYGEN_CONTEXT, degree);
        e
    })
}

/// Derive the public key for a caller-supplied private scalar.
///
/// Rejects the scalar with [`Error::InsufficientEntropy`] when it has fewer
/// than [`ECDH_B163_MIN_SCALAR_BITS`] significant bits. Otherwise clears every
/// bit at or above the bit-length of the group order, rejects again if the
/// cleared scalar fell below the floor, and returns the cleared scalar
/// together with `scalar * G`.
pub fn generate_keypair(
    private_key: EcdhB163SecretKey,
) -> Result<(EcdhB163SecretKey, EcdhB163PublicKey)> {
    check_entropy(&private_key.0)?;

    let curve = Curve::b163();
    let mut private_key = private_key;
    private_key.0.clear_bits_from(curve.order().degree());

    // Clearing can drop the scalar below the floor
    check_entropy(&private_key.0)?;

    let public_point = ec_b163::scalar_mult_base_g(&private_key.0);
    Ok((private_key, EcdhB163PublicKey(public_point)))
}

/// Combine a private scalar with the peer's public key.
///
/// Rejects the peer key with [`Error::InvalidPeerKey`] when it is the identity
/// or does not satisfy the curve equation. Bits of the scalar above bit 162
/// are ignored.
pub fn derive_shared_secret(
    private_key: &EcdhB163SecretKey,
    peer_public_key: &EcdhB163PublicKey,
) -> Result<EcdhB163SharedSecret> {
    let curve = Curve::b163();
    let peer = &peer_public_key.0;

    let checked = validate::peer_key(
        !peer.is_identity(),
        SHARED_SECRET_CONTEXT,
        "point is the identity",
    )
    .and_then(|_| {
        validate::peer_key(
            curve.is_on_curve(peer),
            SHARED_SECRET_CONTEXT,
            "point is not on the curve",
        )
    });
    if let Err(e) = checked {
        debug!("{}: {}", SHARED_SECRET_CONTEXT, e);
        return Err(e);
    }

    let mut scalar = private_key.0.clone();
    scalar.clear_bits_from(B163_FIELD_DEGREE);
    Ok(EcdhB163SharedSecret(curve.mul(peer, &scalar)))
}

impl KeyAgreement for EcdhB163 {
    type SecretKey = EcdhB163SecretKey;
    type PublicKey = EcdhB163PublicKey;
    type SharedSecret = EcdhB163SharedSecret;

    fn name() -> &'static str {
        "ECDH-B163"
    }

    fn keypair_from_secret(secret: Self::SecretKey) -> Result<(Self::SecretKey, Self::PublicKey)> {
        generate_keypair(secret)
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::SecretKey, Self::PublicKey)> {
        let mut attempts = 0usize;
        loop {
            let mut words = [0u32; B163_BITVEC_WORDS];
            for w in words.iter_mut() {
                *w = rng.next_u32();
            }
            let candidate = EcdhB163SecretKey::from_words(words);
            words.zeroize();

            attempts += 1;
            match generate_keypair(candidate) {
                Err(Error::InsufficientEntropy { degree, .. }) => {
                    trace!(
                        "{}: resampling after attempt {} ({} bits)",
                        KEYGEN_CONTEXT,
                        attempts,
                        degree
                    );
                }
                result => return result,
            }
        }
    }

    fn shared_secret(
        secret: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret> {
        derive_shared_secret(secret, peer_public_key)
    }
}
