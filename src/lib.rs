//! # kecdh
//!
//! Elliptic-curve Diffie-Hellman over the NIST B-163 binary curve.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! kecdh = "0.3"
//! ```
//!
//! ```
//! use kecdh::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let (alice_sk, alice_pk) = EcdhB163::keypair(&mut OsRng)?;
//! let (bob_sk, bob_pk) = EcdhB163::keypair(&mut OsRng)?;
//!
//! let alice_ss = EcdhB163::shared_secret(&alice_sk, &bob_pk)?;
//! let bob_ss = EcdhB163::shared_secret(&bob_sk, &alice_pk)?;
//! assert_eq!(alice_ss, bob_ss);
//! # Ok::<(), kecdh::api::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`kecdh-api`]: Error types and the key-agreement trait
//! - [`kecdh-params`]: Curve constants
//! - [`kecdh-algorithms`]: GF(2^163) arithmetic and the B-163 group law
//! - [`kecdh-kex`]: The ECDH protocol

pub use kecdh_algorithms as algorithms;
pub use kecdh_api as api;
pub use kecdh_kex as kex;
pub use kecdh_params as params;

/// Common imports for kecdh users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::KeyAgreement;

    // Protocol entry points
    pub use crate::kex::ecdh::b163::{
        derive_shared_secret, generate_keypair, EcdhB163, EcdhB163PublicKey, EcdhB163SecretKey,
        EcdhB163SharedSecret,
    };

    // Curve primitives
    pub use crate::algorithms::ec::b163::{Curve, CurveParams, FieldElement, Point, Scalar};
}
