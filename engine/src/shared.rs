//! Process-wide default engine
//!
//! Free functions mirroring every [`RandomEngine`] method, backed by one
//! lazily seeded instance, for one-off calls where threading an engine
//! through is not worth it.
//!
//! # Initialisation order
//!
//! The instance is seeded on first use from [`SharedConfig::from_env`].
//! Call [`init`] before any other function here to choose the policy
//! explicitly; once seeded, [`init`] fails and only [`reseed`] can change
//! the state.
//!
//! # Threads
//!
//! Every call takes a mutex, so concurrent use is safe but the interleaving
//! of draws between threads is not deterministic. Code that needs a
//! reproducible stream per thread should own a [`RandomEngine`] instead.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{ConfigError, SharedConfig, SEED_ENV_VAR};
use crate::rng::{RandomEngine, SignedRange, UniformSample, UnsignedRange};

static SHARED: OnceLock<Mutex<RandomEngine>> = OnceLock::new();

/// Errors from explicit initialisation of the shared engine
#[derive(Debug, Error)]
pub enum SharedError {
    #[error("Shared engine already seeded; use reseed() to change its state")]
    AlreadyInitialised,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Seed the shared engine from `config` before its first use.
///
/// Returns the resolved seed, which is worth logging when the policy is
/// [`Entropy`](crate::SeedPolicy::Entropy) so a run can be replayed.
pub fn init(config: SharedConfig) -> Result<u64, SharedError> {
    config.validate()?;
    let seed = config.seed.resolve();
    SHARED
        .set(Mutex::new(RandomEngine::new(seed)))
        .map_err(|_| SharedError::AlreadyInitialised)?;
    debug!(seed, policy = ?config.seed, "Seeded shared engine");
    Ok(seed)
}

/// Overwrite the shared state, initialising the instance if needed.
pub fn reseed(seed: u64) {
    lock().seed(seed);
    debug!(seed, "Reseeded shared engine");
}

/// Run several draws under one lock.
///
/// # Example
/// ```
/// use detrand::shared;
///
/// shared::reseed(42);
/// let (a, b) = shared::with_engine(|rng| (rng.next_uint64(), rng.next_uint64()));
/// assert_ne!(a, b);
/// ```
pub fn with_engine<R>(f: impl FnOnce(&mut RandomEngine) -> R) -> R {
    f(&mut lock())
}

/// See [`RandomEngine::next_uint64`].
pub fn next_uint64() -> u64 {
    lock().next_uint64()
}

/// See [`RandomEngine::next_uint`].
pub fn next_uint<T: UnsignedRange>(min: T, max: T) -> T {
    lock().next_uint(min, max)
}

/// See [`RandomEngine::next_int`].
pub fn next_int<T: SignedRange>(min: T, max: T) -> T {
    lock().next_int(min, max)
}

/// See [`RandomEngine::next_i64`].
pub fn next_i64() -> i64 {
    lock().next_i64()
}

/// See [`RandomEngine::next_float`].
pub fn next_float() -> f32 {
    lock().next_float()
}

/// See [`RandomEngine::next_float_in`].
pub fn next_float_in(min: f32, max: f32) -> f32 {
    lock().next_float_in(min, max)
}

/// Value between `min` and `max` for any [`UniformSample`] type.
///
/// # Example
/// ```
/// use detrand::shared;
///
/// let roll: i32 = shared::get_random(1, 6);
/// assert!((1..=6).contains(&roll));
/// ```
pub fn get_random<T: UniformSample>(min: T, max: T) -> T {
    T::sample(&mut lock(), min, max)
}

/// Same as `get_random(0, max)`.
pub fn get_random_max<T: UniformSample>(max: T) -> T {
    get_random(T::ZERO, max)
}

fn lock() -> MutexGuard<'static, RandomEngine> {
    // No engine method panics, so a poisoned lock still holds a valid state.
    SHARED
        .get_or_init(|| Mutex::new(RandomEngine::new(seed_from_env())))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn seed_from_env() -> u64 {
    let config = SharedConfig::from_env()
        .and_then(|config| config.validate().map(|()| config))
        .unwrap_or_else(|err| {
            warn!(%err, "Ignoring {}, falling back to entropy", SEED_ENV_VAR);
            SharedConfig::default()
        });
    let seed = config.seed.resolve();
    debug!(seed, policy = ?config.seed, "Lazily seeded shared engine");
    seed
}
