//! Trait definitions for the kecdh library

pub mod key_agreement;

pub use key_agreement::KeyAgreement;
