//! Constant values for the kecdh library
//!
//! Curve parameters are stored as little-word-first arrays of 32-bit words:
//! word 0 holds the least-significant bits.

#![no_std]

pub mod traditional;
