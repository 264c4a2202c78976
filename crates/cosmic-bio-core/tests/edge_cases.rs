//! Edge case and boundary condition tests
//!
//! These tests verify the card handles wrap-around, malformed persisted
//! values and unusual inputs without surfacing errors.

use std::sync::Arc;

use cosmic_bio_core::{
    decrement_counter, format_counter, increment_counter, load_persisted_counter, BioCardState,
    BioError, CardConfig, KeyValueStore, MemoryStore, SharedStore, Storage, SurfaceRect,
    UidSession, COUNTER_KEY,
};
use cosmic_bio_core::identifier::IdentifierMode;
use tempfile::TempDir;

// ============================================================================
// Counter Boundaries
// ============================================================================

#[test]
fn test_wrap_boundaries() {
    assert_eq!(increment_counter(9999), 0);
    assert_eq!(decrement_counter(0), 9999);
    assert_eq!(format_counter(increment_counter(9999)), "#0000");
    assert_eq!(format_counter(decrement_counter(0)), "#9999");
}

#[test]
fn test_session_wraps_and_persists() {
    let store: SharedStore = Arc::new(MemoryStore::new());
    store.set(COUNTER_KEY, "9999").unwrap();

    let mut session = UidSession::open(IdentifierMode::Sequential, store.clone(), COUNTER_KEY);
    session.increment().unwrap();
    assert_eq!(session.display(), "#0000");
    assert_eq!(store.get(COUNTER_KEY).unwrap(), Some("0".to_string()));

    session.decrement().unwrap();
    assert_eq!(session.display(), "#9999");
    assert_eq!(store.get(COUNTER_KEY).unwrap(), Some("9999".to_string()));
}

// ============================================================================
// Malformed Persisted Values
// ============================================================================

#[test]
fn test_malformed_values_load_as_zero() {
    let values = ["", "abc", "-5", "10000", "65536", "3.5", "NaN", "#0003"];

    for raw in values {
        let store = MemoryStore::new();
        store.set(COUNTER_KEY, raw).unwrap();
        assert_eq!(
            load_persisted_counter(&store, COUNTER_KEY),
            0,
            "value {:?} should load as 0",
            raw
        );
    }
}

/// A store whose reads and writes always fail
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, BioError> {
        Err(BioError::Io(std::io::Error::other("disk gone")))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), BioError> {
        Err(BioError::Io(std::io::Error::other("quota exceeded")))
    }
}

#[test]
fn test_read_failure_loads_zero() {
    assert_eq!(load_persisted_counter(&BrokenStore, COUNTER_KEY), 0);
}

#[test]
fn test_write_failure_is_returned_but_state_moves() {
    let store: SharedStore = Arc::new(BrokenStore);
    let mut card = BioCardState::open(&CardConfig::default(), store);

    let err = card.increment().unwrap_err();
    assert!(matches!(err, BioError::Io(_)));
    assert_eq!(card.uid(), "#0001");
}

#[test]
fn test_custom_storage_key() {
    let dir = TempDir::new().unwrap();
    let config = CardConfig {
        data_dir: dir.path().to_path_buf(),
        storage_key: "other_uid".to_string(),
        ..CardConfig::default()
    };
    let storage = Storage::new(config.database_path()).unwrap();
    let store: SharedStore = Arc::new(storage.clone());

    let mut card = BioCardState::open(&config, store);
    card.increment().unwrap();

    assert_eq!(storage.get("other_uid").unwrap(), Some("1".to_string()));
    assert_eq!(storage.get(COUNTER_KEY).unwrap(), None);
}

// ============================================================================
// Interaction Edge Cases
// ============================================================================

#[test]
fn test_tilt_with_zero_size_surface() {
    let mut card = BioCardState::open(&CardConfig::default(), Arc::new(MemoryStore::new()));
    card.pointer_move(10.0, 10.0, &SurfaceRect::default());
    assert!(card.tilt().is_flat());
}

#[test]
fn test_badge_index_out_of_range() {
    let mut card = BioCardState::open(&CardConfig::default(), Arc::new(MemoryStore::new()));
    assert!(card.toggle_badge(5).is_err());
    assert!(card.toggle_badge(usize::MAX).is_err());
    assert!(card.badges().is_empty());
}

#[test]
fn test_double_toggle_auto_restores_off() {
    let mut card = BioCardState::open(&CardConfig::default(), Arc::new(MemoryStore::new()));
    assert!(card.toggle_auto_advance());
    assert!(!card.toggle_auto_advance());
    assert!(!card.is_auto_advancing());
}
