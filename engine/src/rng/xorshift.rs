//! xorshift64* random number generator
//!
//! Fast, seedable PRNG for simulation, procedural content and test
//! fixtures. Not suitable for anything security related.
//!
//! # Algorithm
//!
//! The 64-bit state is advanced by three xor-shifts (12, 25, 27). The
//! returned value is the new state multiplied by `0x2545F4914F6CDD1D`;
//! the product scrambles the output only and never feeds back into the
//! state.
//!
//! # Determinism
//!
//! Same seed → same sequence. Reseeding to a value restarts exactly the
//! sequence that value produced the first time.
//!
//! # Zero seed
//!
//! Zero is a fixed point of the recurrence: an engine seeded with 0
//! returns 0 forever. Callers must pass a non-zero seed. This is left
//! unchecked so that `new`, `seed` and `Default` stay plain assignments.

use serde::{Deserialize, Serialize};

use super::range::{SignedRange, UnsignedRange};

/// Output scrambling multiplier (odd).
const MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;

/// Bit pattern of `1.0f32`; or-ing 23 random mantissa bits into it gives
/// a float uniformly spread over `[1.0, 2.0)`.
const ONE_F32_BITS: u32 = 0x3f80_0000;

/// Deterministic random number generator using xorshift64*
///
/// The whole generator is one `u64`, so it is cheap to copy and to embed
/// in other state. Every generation method takes `&mut self`; share an
/// engine between threads only behind external synchronisation, or give
/// each thread its own.
///
/// # Example
/// ```
/// use detrand::RandomEngine;
///
/// let mut rng = RandomEngine::new(12345);
/// let raw = rng.next_uint64();
/// let die = rng.next_uint(1u32, 6);
/// let offset = rng.next_int(-10i64, 10);
/// let t = rng.next_float();
///
/// assert!((1..=6).contains(&die));
/// assert!((-10..=10).contains(&offset));
/// assert!((0.0..1.0).contains(&t));
/// # let _ = raw;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RandomEngine {
    /// Internal state (64-bit)
    state: u64,
}

impl RandomEngine {
    /// Create a new engine with given seed
    ///
    /// The seed is stored as-is. A zero seed yields an all-zero stream.
    ///
    /// # Example
    /// ```
    /// use detrand::RandomEngine;
    ///
    /// let rng = RandomEngine::new(12345);
    /// assert_eq!(rng.state(), 12345);
    /// ```
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Overwrite the state, restarting the sequence for `value`
    ///
    /// # Example
    /// ```
    /// use detrand::RandomEngine;
    ///
    /// let mut rng = RandomEngine::new(7);
    /// let first = rng.next_uint64();
    /// rng.next_uint64();
    ///
    /// rng.seed(7);
    /// assert_eq!(rng.next_uint64(), first);
    /// ```
    pub fn seed(&mut self, value: u64) {
        self.state = value;
    }

    /// Get current state (for checkpointing/replay)
    ///
    /// An engine created from this value continues the same sequence.
    ///
    /// # Example
    /// ```
    /// use detrand::RandomEngine;
    ///
    /// let mut rng = RandomEngine::new(12345);
    /// rng.next_uint64();
    ///
    /// let mut replay = RandomEngine::new(rng.state());
    /// assert_eq!(replay.next_uint64(), rng.next_uint64());
    /// ```
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Generate next raw u64 value, anywhere in `[0, u64::MAX]`
    #[inline]
    pub fn next_uint64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(MULTIPLIER)
    }

    /// Generate an unsigned value in `[min, max]` (both inclusive)
    ///
    /// Works for `u32` (reduces the low 32 bits of the raw value) and `u64`.
    /// `min == max` returns `min` without advancing the state.
    ///
    /// The mapping is a plain modulo, so spans that do not divide the type
    /// range are slightly biased toward low values. The span is clamped to
    /// `T::MAX`, which means the full range `[0, T::MAX]` never yields
    /// `T::MAX` itself. A reversed range (`max < min`) wraps around the
    /// type, like ordinary unsigned arithmetic.
    ///
    /// # Example
    /// ```
    /// use detrand::RandomEngine;
    ///
    /// let mut rng = RandomEngine::new(42);
    /// assert_eq!(rng.next_uint(5u32, 5), 5);
    ///
    /// let v = rng.next_uint(100u64, 200);
    /// assert!((100..=200).contains(&v));
    /// ```
    #[inline]
    pub fn next_uint<T: UnsignedRange>(&mut self, min: T, max: T) -> T {
        if min == max {
            return min;
        }
        T::map_raw(self.next_uint64(), min, max)
    }

    /// Generate a signed value in `[min, max]` (both inclusive)
    ///
    /// Works for `i32` and `i64`. The full unsigned raw value is reduced
    /// modulo the span, so the sign bit never leaks into the result.
    /// Same bias and top-value clamp as [`next_uint`](Self::next_uint).
    /// A reversed range (`max < min`) yields `min` or `min + 1`.
    ///
    /// # Example
    /// ```
    /// use detrand::RandomEngine;
    ///
    /// let mut rng = RandomEngine::new(42);
    /// assert_eq!(rng.next_int(-3i32, -3), -3);
    ///
    /// let v = rng.next_int(-50i64, 50);
    /// assert!((-50..=50).contains(&v));
    /// ```
    #[inline]
    pub fn next_int<T: SignedRange>(&mut self, min: T, max: T) -> T {
        if min == max {
            return min;
        }
        T::map_raw(self.next_uint64(), min, max)
    }

    /// Generate any i64, the raw output's bits read as two's complement
    #[inline]
    pub fn next_i64(&mut self) -> i64 {
        self.next_uint64() as i64
    }

    /// Generate random f32 in range [0.0, 1.0)
    ///
    /// Built directly from mantissa bits, so every result is a multiple of
    /// 2^-23 and the grid is evenly spaced.
    ///
    /// # Example
    /// ```
    /// use detrand::RandomEngine;
    ///
    /// let mut rng = RandomEngine::new(12345);
    /// let probability = rng.next_float();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    #[inline]
    pub fn next_float(&mut self) -> f32 {
        let mantissa = (self.next_uint64() as u32) >> 9;
        f32::from_bits(ONE_F32_BITS | mantissa) - 1.0
    }

    /// Generate f32 in `[min, max)` by linear interpolation
    ///
    /// Bounds are not checked: with `max < min` the result lies in
    /// `(max, min]`.
    #[inline]
    pub fn next_float_in(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_float()
    }
}

impl rand::RngCore for RandomEngine {
    fn next_u32(&mut self) -> u32 {
        self.next_uint64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_uint64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_uint64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl rand::SeedableRng for RandomEngine {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    // The state is the seed; no expansion step.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
