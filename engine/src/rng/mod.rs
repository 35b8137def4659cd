//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm. The engine is a plain value: it never
//! reads clocks, the environment or any other entropy source. For a
//! process-wide default instance see [`crate::shared`].

mod range;
mod xorshift;

pub use range::{SignedRange, UniformSample, UnsignedRange};
pub use xorshift::RandomEngine;
