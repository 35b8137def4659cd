//! detrand - deterministic random numbers
//!
//! Seedable, reproducible xorshift64* generator with uniform sampling of
//! integers and floats over caller-chosen ranges. Not cryptographically
//! secure.
//!
//! # Architecture
//!
//! - **rng**: [`RandomEngine`], a 64-bit value type; never reads ambient entropy
//! - **config**: seeding policy for the shared instance
//! - **shared**: process-wide default engine and free functions
//!
//! # Critical Invariants
//!
//! 1. Same seed, same calls → same values, bit for bit
//! 2. No generation call fails or panics; degenerate inputs have defined results
//! 3. Seed 0 is a fixed point: callers must seed with a non-zero value

pub mod config;
pub mod rng;
pub mod shared;

pub use config::{ConfigError, SeedPolicy, SharedConfig};
pub use rng::{RandomEngine, SignedRange, UniformSample, UnsignedRange};
pub use shared::SharedError;
