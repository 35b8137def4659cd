//! Tests for ranged integer and float sampling

use detrand::RandomEngine;
use proptest::prelude::*;

#[test]
fn test_degenerate_ranges_return_min() {
    let mut rng = RandomEngine::new(12345);

    for _ in 0..50 {
        rng.next_uint64();
        assert_eq!(rng.next_uint(5u32, 5), 5);
        assert_eq!(rng.next_uint(5u64, 5), 5);
        assert_eq!(rng.next_int(-3i32, -3), -3);
        assert_eq!(rng.next_int(-3i64, -3), -3);
    }
}

#[test]
fn test_reference_ranged_values_seed_42() {
    let mut rng = RandomEngine::new(42);
    let u32s: Vec<u32> = (0..4).map(|_| rng.next_uint(10u32, 20)).collect();
    assert_eq!(u32s, [12, 20, 10, 11]);

    rng.seed(42);
    let u64s: Vec<u64> = (0..4).map(|_| rng.next_uint(100u64, 200)).collect();
    assert_eq!(u64s, [146, 179, 191, 105]);

    rng.seed(42);
    let i64s: Vec<i64> = (0..4).map(|_| rng.next_int(-50i64, 50)).collect();
    assert_eq!(i64s, [-4, 29, 41, -45]);

    rng.seed(42);
    let i32s: Vec<i32> = (0..4).map(|_| rng.next_int(-5i32, 5)).collect();
    assert_eq!(i32s, [-5, 4, 1, 4]);
}

#[test]
fn test_small_range_hits_every_value() {
    let mut rng = RandomEngine::new(2024);
    let mut seen = [false; 6];

    for _ in 0..1000 {
        let roll = rng.next_uint(1u32, 6);
        seen[(roll - 1) as usize] = true;
    }

    assert!(seen.iter().all(|&s| s), "not every face rolled: {:?}", seen);
}

#[test]
fn test_full_width_ranges_do_not_panic() {
    let mut rng = RandomEngine::new(12345);

    for _ in 0..1000 {
        let _ = rng.next_uint(0u32, u32::MAX);
        let _ = rng.next_uint(0u64, u64::MAX);

        let v = rng.next_int(i32::MIN, i32::MAX);
        assert!(v <= i32::MIN + (i32::MAX - 1), "{} above saturated span", v);

        let v = rng.next_int(i64::MIN, i64::MAX);
        assert!(v <= i64::MIN + (i64::MAX - 1), "{} above saturated span", v);
    }
}

#[test]
fn test_max_representable_span() {
    let mut rng = RandomEngine::new(12345);

    for _ in 0..1000 {
        let v = rng.next_int(0i64, i64::MAX);
        assert!((0..i64::MAX).contains(&v));

        let v = rng.next_int(-1i32, i32::MAX - 1);
        assert!((-1..i32::MAX - 1).contains(&v));
    }
}

#[test]
fn test_reversed_ranges_are_defined() {
    let mut rng = RandomEngine::new(12345);

    for _ in 0..100 {
        let v = rng.next_int(10i32, -10);
        assert!(v == 10 || v == 11, "reversed signed range gave {}", v);

        // unsigned subtraction wraps, so min + offset wraps past zero too
        let _ = rng.next_uint(10u32, 0);
        let _ = rng.next_uint(u64::MAX, 0);
    }
}

#[test]
fn test_next_float_in_range() {
    let mut rng = RandomEngine::new(12345);

    for _ in 0..10_000 {
        let v = rng.next_float();
        assert!((0.0..1.0).contains(&v), "{} outside [0, 1)", v);

        let v = rng.next_float_in(-100.0, 100.0);
        assert!((-100.0..100.0).contains(&v), "{} outside [-100, 100)", v);
    }
}

#[test]
fn test_float_grid_spacing() {
    let mut rng = RandomEngine::new(12345);
    let step = 1.0 / (1u32 << 23) as f32;

    for _ in 0..1000 {
        let v = rng.next_float();
        assert_eq!((v / step).fract(), 0.0, "{} not on the 2^-23 grid", v);
    }
}

#[test]
fn test_float_in_equal_bounds() {
    let mut rng = RandomEngine::new(12345);
    assert_eq!(rng.next_float_in(3.5, 3.5), 3.5);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_u32_containment(seed in any::<u64>(), a in any::<u32>(), b in any::<u32>()) {
        let (min, max) = (a.min(b), a.max(b));
        let mut rng = RandomEngine::new(seed);
        for _ in 0..32 {
            let v = rng.next_uint(min, max);
            prop_assert!(min <= v && v <= max, "{} outside [{}, {}]", v, min, max);
        }
    }

    #[test]
    fn prop_u64_containment(seed in any::<u64>(), a in any::<u64>(), b in any::<u64>()) {
        let (min, max) = (a.min(b), a.max(b));
        let mut rng = RandomEngine::new(seed);
        for _ in 0..32 {
            let v = rng.next_uint(min, max);
            prop_assert!(min <= v && v <= max, "{} outside [{}, {}]", v, min, max);
        }
    }

    #[test]
    fn prop_i32_containment(seed in any::<u64>(), a in any::<i32>(), b in any::<i32>()) {
        let (min, max) = (a.min(b), a.max(b));
        let mut rng = RandomEngine::new(seed);
        for _ in 0..32 {
            let v = rng.next_int(min, max);
            prop_assert!(min <= v && v <= max, "{} outside [{}, {}]", v, min, max);
        }
    }

    #[test]
    fn prop_i64_containment(seed in any::<u64>(), a in any::<i64>(), b in any::<i64>()) {
        let (min, max) = (a.min(b), a.max(b));
        let mut rng = RandomEngine::new(seed);
        for _ in 0..32 {
            let v = rng.next_int(min, max);
            prop_assert!(min <= v && v <= max, "{} outside [{}, {}]", v, min, max);
        }
    }

    /// Bounds straddling zero with |min|, |max| <= width keep the half-open
    /// upper bound exact under f32 rounding.
    #[test]
    fn prop_float_in_containment(seed in any::<u64>(), width in 1u32..=1000, frac in 0u32..=100) {
        let min = -((width * frac / 100) as f32);
        let max = min + width as f32;
        let mut rng = RandomEngine::new(seed);
        for _ in 0..32 {
            let v = rng.next_float_in(min, max);
            prop_assert!(min <= v && v < max, "{} outside [{}, {})", v, min, max);
        }
    }
}
