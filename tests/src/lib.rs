//! Known-answer vectors and helpers shared by the kecdh integration tests
pub mod vectors;
