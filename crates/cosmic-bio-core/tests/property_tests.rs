//! Property-based tests for the identifier provider and badge set
//!
//! Uses proptest to verify the counter arithmetic, code shape and toggle
//! invariants hold across their whole input space.

use cosmic_bio_core::identifier::{generate_random_code_with, is_valid_code, CODE_ALPHABET};
use cosmic_bio_core::{
    decrement_counter, format_counter, increment_counter, load_persisted_counter, persist_counter,
    BadgeSet, MemoryStore, SurfaceRect, Tilt, BADGES, COUNTER_KEY,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any valid counter value
fn counter_strategy() -> impl Strategy<Value = u16> {
    0u16..10_000
}

/// Sequences of badge indices, all in range
fn toggle_sequence_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..BADGES.len(), 0..32)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Formatted counters are always `#` plus four digits
    #[test]
    fn format_counter_shape(n in counter_strategy()) {
        let s = format_counter(n);
        prop_assert_eq!(s.len(), 5);
        prop_assert!(s.starts_with('#'));
        prop_assert!(s[1..].bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(s[1..].parse::<u16>().unwrap(), n);
    }

    /// Increment and decrement undo each other
    #[test]
    fn increment_decrement_inverse(n in counter_strategy()) {
        prop_assert_eq!(increment_counter(decrement_counter(n)), n);
        prop_assert_eq!(decrement_counter(increment_counter(n)), n);
    }

    /// Stepping never leaves the counter range
    #[test]
    fn steps_stay_in_range(n in counter_strategy(), steps in 0usize..50) {
        let mut up = n;
        let mut down = n;
        for _ in 0..steps {
            up = increment_counter(up);
            down = decrement_counter(down);
            prop_assert!(up < 10_000);
            prop_assert!(down < 10_000);
        }
    }

    /// Whatever is persisted is what is loaded back
    #[test]
    fn persist_load_roundtrip(n in counter_strategy()) {
        let store = MemoryStore::new();
        persist_counter(&store, COUNTER_KEY, n).unwrap();
        prop_assert_eq!(load_persisted_counter(&store, COUNTER_KEY), n);
    }

    /// Random codes match `ZEO-[ALPHABET]{4}-[ALPHABET]{4}` for any seed
    #[test]
    fn random_code_shape(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let code = generate_random_code_with(&mut rng);
        prop_assert!(is_valid_code(&code), "bad code {}", code);
        prop_assert!(code[4..8].bytes().chain(code[9..].bytes()).all(|b| CODE_ALPHABET.contains(&b)));
    }

    /// Toggling the same index twice is a no-op
    #[test]
    fn badge_toggle_involution(prefix in toggle_sequence_strategy(), index in 0..BADGES.len()) {
        let mut set = BadgeSet::new();
        for i in prefix {
            set.toggle(i).unwrap();
        }
        let before = set;
        set.toggle(index).unwrap();
        prop_assert_ne!(set, before);
        set.toggle(index).unwrap();
        prop_assert_eq!(set, before);
    }

    /// Tilt stays within ±5° on both axes for any pointer position
    #[test]
    fn tilt_is_bounded(x in -5000.0f64..5000.0, y in -5000.0f64..5000.0) {
        let rect = SurfaceRect::new(120.0, 80.0, 640.0, 420.0);
        let tilt = Tilt::from_pointer(x, y, &rect);
        prop_assert!(tilt.x.abs() <= 5.0);
        prop_assert!(tilt.y.abs() <= 5.0);
    }
}

/// Independent codes from the thread RNG should not collide in practice
#[test]
fn random_codes_are_distinct() {
    let codes: std::collections::HashSet<String> =
        (0..200).map(|_| cosmic_bio_core::generate_random_code()).collect();
    assert_eq!(codes.len(), 200);
}
