//! ECDH implementations

pub mod b163;

// Re-export the B-163 types
pub use b163::{
    derive_shared_secret, generate_keypair, EcdhB163, EcdhB163PublicKey, EcdhB163SecretKey,
    EcdhB163SharedSecret, ECDH_B163_MIN_SCALAR_BITS,
};
