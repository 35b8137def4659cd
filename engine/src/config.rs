//! Seeding configuration for the shared engine
//!
//! The core [`RandomEngine`](crate::RandomEngine) only ever takes an explicit
//! seed. Where that seed comes from for the process-wide instance is decided
//! here: a fixed value for reproducible runs, or OS entropy otherwise.
//!
//! # Environment
//!
//! `DETRAND_SEED` overrides the default policy:
//! - unset, empty or `entropy` → [`SeedPolicy::Entropy`]
//! - decimal (`42`) or hex (`0x2a`) → [`SeedPolicy::Fixed`]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable read by [`SharedConfig::from_env`].
pub const SEED_ENV_VAR: &str = "DETRAND_SEED";

/// Errors that can occur while building a [`SharedConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid seed value {value:?}: expected decimal, 0x-prefixed hex or \"entropy\"")]
    InvalidSeed { value: String },

    #[error("Seed 0 produces an all-zero stream")]
    ZeroSeed,

    #[error("Invalid config document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the shared engine's seed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedPolicy {
    /// Always the same seed (reproducible runs)
    Fixed(u64),

    /// A fresh non-zero seed from the OS entropy source
    #[default]
    Entropy,
}

impl SeedPolicy {
    /// Turn the policy into a concrete seed.
    ///
    /// `Entropy` never returns zero.
    ///
    /// # Example
    /// ```
    /// use detrand::SeedPolicy;
    ///
    /// assert_eq!(SeedPolicy::Fixed(42).resolve(), 42);
    /// assert_ne!(SeedPolicy::Entropy.resolve(), 0);
    /// ```
    pub fn resolve(&self) -> u64 {
        match *self {
            SeedPolicy::Fixed(seed) => seed,
            SeedPolicy::Entropy => loop {
                let seed: u64 = rand::random();
                if seed != 0 {
                    break seed;
                }
            },
        }
    }

    /// Parse a textual seed policy (the `DETRAND_SEED` format).
    ///
    /// # Example
    /// ```
    /// use detrand::SeedPolicy;
    ///
    /// assert_eq!(SeedPolicy::parse("0x2a").unwrap(), SeedPolicy::Fixed(42));
    /// assert_eq!(SeedPolicy::parse("entropy").unwrap(), SeedPolicy::Entropy);
    /// ```
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("entropy") {
            return Ok(SeedPolicy::Entropy);
        }

        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => trimmed.parse::<u64>(),
        };

        parsed
            .map(SeedPolicy::Fixed)
            .map_err(|_| ConfigError::InvalidSeed {
                value: value.to_string(),
            })
    }
}

/// Configuration for the process-wide default engine.
///
/// # Example
/// ```
/// use detrand::{SeedPolicy, SharedConfig};
///
/// let config = SharedConfig::from_json(r#"{"seed": {"fixed": 7}}"#).unwrap();
/// assert_eq!(config.seed, SeedPolicy::Fixed(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedConfig {
    /// Seeding policy applied on initialisation
    pub seed: SeedPolicy,
}

impl SharedConfig {
    /// Config with a fixed seed.
    pub fn fixed(seed: u64) -> Self {
        Self {
            seed: SeedPolicy::Fixed(seed),
        }
    }

    /// Build the config from `DETRAND_SEED`.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(SEED_ENV_VAR) {
            Ok(value) => Ok(Self {
                seed: SeedPolicy::parse(&value)?,
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject configurations that would produce a degenerate stream.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.seed {
            SeedPolicy::Fixed(0) => Err(ConfigError::ZeroSeed),
            _ => Ok(()),
        }
    }
}
