//! Range mapping for the integer widths the engine supports
//!
//! `span = clamp(max - min, 1, T::MAX - 1) + 1`, result `min + raw % span`.
//! The clamp keeps `span` non-zero when `max - min == T::MAX`, at the cost
//! of never returning the very top value of a full-width range.

use super::xorshift::RandomEngine;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
}

/// Unsigned widths accepted by [`RandomEngine::next_uint`]
pub trait UnsignedRange: Copy + PartialEq + sealed::Sealed {
    /// Map one raw engine output into `[min, max]`. Caller handles `min == max`.
    fn map_raw(raw: u64, min: Self, max: Self) -> Self;
}

/// Signed widths accepted by [`RandomEngine::next_int`]
pub trait SignedRange: Copy + PartialEq + sealed::Sealed {
    /// Map one raw engine output into `[min, max]`. Caller handles `min == max`.
    fn map_raw(raw: u64, min: Self, max: Self) -> Self;
}

impl UnsignedRange for u32 {
    #[inline]
    fn map_raw(raw: u64, min: u32, max: u32) -> u32 {
        let span = max.wrapping_sub(min).clamp(1, u32::MAX - 1) + 1;
        min.wrapping_add(raw as u32 % span)
    }
}

impl UnsignedRange for u64 {
    #[inline]
    fn map_raw(raw: u64, min: u64, max: u64) -> u64 {
        let span = max.wrapping_sub(min).clamp(1, u64::MAX - 1) + 1;
        min.wrapping_add(raw % span)
    }
}

// Signed spans saturate instead of wrapping, so a range wider than T::MAX
// still maps onto [min, min + T::MAX - 1] rather than collapsing.
impl SignedRange for i32 {
    #[inline]
    fn map_raw(raw: u64, min: i32, max: i32) -> i32 {
        let span = max.saturating_sub(min).clamp(1, i32::MAX - 1) + 1;
        min.wrapping_add((raw % span as u64) as i32)
    }
}

impl SignedRange for i64 {
    #[inline]
    fn map_raw(raw: u64, min: i64, max: i64) -> i64 {
        let span = max.saturating_sub(min).clamp(1, i64::MAX - 1) + 1;
        min.wrapping_add((raw % span as u64) as i64)
    }
}

/// Types that can be drawn uniformly between two bounds
///
/// Integers are inclusive on both ends, `f32` is half-open `[min, max)`.
/// Used by the free functions in [`crate::shared`].
pub trait UniformSample: Copy + sealed::Sealed {
    /// Lower bound used by the single-argument helpers.
    const ZERO: Self;

    fn sample(engine: &mut RandomEngine, min: Self, max: Self) -> Self;
}

impl UniformSample for u32 {
    const ZERO: Self = 0;

    fn sample(engine: &mut RandomEngine, min: Self, max: Self) -> Self {
        engine.next_uint(min, max)
    }
}

impl UniformSample for u64 {
    const ZERO: Self = 0;

    fn sample(engine: &mut RandomEngine, min: Self, max: Self) -> Self {
        engine.next_uint(min, max)
    }
}

impl UniformSample for i32 {
    const ZERO: Self = 0;

    fn sample(engine: &mut RandomEngine, min: Self, max: Self) -> Self {
        engine.next_int(min, max)
    }
}

impl UniformSample for i64 {
    const ZERO: Self = 0;

    fn sample(engine: &mut RandomEngine, min: Self, max: Self) -> Self {
        engine.next_int(min, max)
    }
}

impl UniformSample for f32 {
    const ZERO: Self = 0.0;

    fn sample(engine: &mut RandomEngine, min: Self, max: Self) -> Self {
        engine.next_float_in(min, max)
    }
}
