//! Trait definition for Diffie-Hellman style key agreement
//!
//! Each party derives a public key from a private scalar, exchanges public
//! keys, and combines its own private scalar with the peer's public key.
//! The shared secret itself is never transmitted.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for a key-agreement scheme over a fixed group.
///
/// Every operation is a pure function of its inputs; implementations keep no
/// session state between calls.
pub trait KeyAgreement {
    /// Private scalar type. Zeroized when no longer needed.
    type SecretKey: Zeroize + Clone;

    /// Public key type sent to the peer.
    type PublicKey: Clone;

    /// Shared secret type. Zeroized when no longer needed.
    type SharedSecret: Zeroize + Clone;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Derive the public key for a caller-supplied private scalar.
    ///
    /// The scalar may be adjusted before use; the adjusted scalar is returned
    /// alongside the public key and must be the one used afterwards.
    fn keypair_from_secret(secret: Self::SecretKey) -> Result<(Self::SecretKey, Self::PublicKey)>;

    /// Sample a private scalar from `rng` and derive its public key,
    /// resampling until the scalar is accepted.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::SecretKey, Self::PublicKey)>;

    /// Combine a private scalar with a peer public key.
    ///
    /// Must reject peer keys that are not valid group elements.
    fn shared_secret(
        secret: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
