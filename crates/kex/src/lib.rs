//! Key exchange over binary elliptic curves
//!
//! This crate implements Elliptic-Curve Diffie-Hellman on NIST B-163. Each
//! party turns a private scalar into a public key; combining one's own
//! private scalar with the peer's public key yields the same shared point on
//! both sides.
//!
//! The crate does not generate randomness on its own. Callers either supply
//! the private scalar words directly or pass a `CryptoRng` to
//! [`EcdhB163::keypair`](kecdh_api::KeyAgreement::keypair).

#![forbid(unsafe_code)]

pub mod ecdh;

// Re-exports
pub use ecdh::EcdhB163;
pub use ecdh::{derive_shared_secret, generate_keypair};
