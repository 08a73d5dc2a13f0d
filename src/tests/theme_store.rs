use crate::tests::common;
use crate::tests::common::mocks::FlakyEnvironment;
use crate::theme::{MemoryEnvironment, ThemeStore};

#[test]
fn default_light_when_nothing_saved() {
    common::setup();
    let environment = MemoryEnvironment::new();

    let store = ThemeStore::initialize(Box::new(environment.clone()));

    assert!(!store.is_dark());
    // Initialization already synchronizes, so a fresh session leaves a
    // readable record behind and no dark marker.
    assert_eq!(environment.saved_value(), Some("light".to_string()));
    assert!(!environment.marker_applied());
}

#[test]
fn saved_dark_restores_dark() {
    common::setup();
    let environment = MemoryEnvironment::with_saved("dark");

    let store = ThemeStore::initialize(Box::new(environment.clone()));

    assert!(store.is_dark());
    assert!(environment.marker_applied());
}

#[test]
fn unknown_saved_value_falls_back_to_light() {
    common::setup();
    let environment = MemoryEnvironment::with_saved("solarized");

    let store = ThemeStore::initialize(Box::new(environment.clone()));

    assert!(!store.is_dark());
    assert_eq!(environment.saved_value(), Some("light".to_string()));
}

#[test]
fn toggle_flips_and_persists() {
    common::setup();
    let environment = MemoryEnvironment::new();
    let mut store = ThemeStore::initialize(Box::new(environment.clone()));

    store.toggle();
    assert!(store.is_dark());
    assert_eq!(environment.saved_value(), Some("dark".to_string()));
    assert!(environment.marker_applied());

    store.toggle();
    assert!(!store.is_dark());
    assert_eq!(environment.saved_value(), Some("light".to_string()));
    assert!(!environment.marker_applied());
}

#[test]
fn reinitialize_restores_the_last_toggle() {
    common::setup();
    let environment = MemoryEnvironment::new();

    let mut first_session = ThemeStore::initialize(Box::new(environment.clone()));
    first_session.toggle();
    assert!(first_session.is_dark());
    drop(first_session);

    let second_session = ThemeStore::initialize(Box::new(environment.clone()));
    assert!(second_session.is_dark());
    assert!(environment.marker_applied());

    // Re-initializing without an intervening toggle changes nothing.
    let third_session = ThemeStore::initialize(Box::new(environment.clone()));
    assert!(third_session.is_dark());
    assert_eq!(environment.saved_value(), Some("dark".to_string()));
}

#[test]
fn storage_write_failure_still_flips_flag_and_marker() {
    common::setup();
    let inner = MemoryEnvironment::new();
    let environment = FlakyEnvironment {
        inner: inner.clone(),
        fail_writes: true,
        ..Default::default()
    };

    let mut store = ThemeStore::initialize(Box::new(environment));
    store.toggle();

    assert!(store.is_dark());
    // The record never made it to storage, but the session state and the
    // document marker moved on regardless.
    assert_eq!(inner.saved_value(), None);
    assert!(inner.marker_applied());
}

#[test]
fn storage_read_failure_defaults_to_light() {
    common::setup();
    let inner = MemoryEnvironment::with_saved("dark");
    let environment = FlakyEnvironment {
        inner: inner.clone(),
        fail_reads: true,
        ..Default::default()
    };

    let store = ThemeStore::initialize(Box::new(environment));

    assert!(!store.is_dark());
    // Writes still work, so the fallback state is persisted over the
    // unreadable record.
    assert_eq!(inner.saved_value(), Some("light".to_string()));
}

#[test]
fn marker_failure_does_not_block_toggle() {
    common::setup();
    let inner = MemoryEnvironment::new();
    let environment = FlakyEnvironment {
        inner: inner.clone(),
        fail_marker: true,
        ..Default::default()
    };

    let mut store = ThemeStore::initialize(Box::new(environment));
    store.toggle();

    assert!(store.is_dark());
    assert_eq!(inner.saved_value(), Some("dark".to_string()));
    assert!(!inner.marker_applied());
}

#[test]
fn dark_session_round_trip() {
    common::setup();
    let environment = MemoryEnvironment::new();

    // First visit: default light, user switches to dark.
    let mut first_visit = ThemeStore::initialize(Box::new(environment.clone()));
    assert!(!first_visit.is_dark());
    first_visit.toggle();
    assert_eq!(environment.saved_value(), Some("dark".to_string()));
    drop(first_visit);

    // Next visit: dark from the first render, marker already applied.
    let mut second_visit = ThemeStore::initialize(Box::new(environment.clone()));
    assert!(second_visit.is_dark());
    assert!(environment.marker_applied());

    // Switching back leaves every surface in the light state.
    second_visit.toggle();
    assert!(!second_visit.is_dark());
    assert!(!environment.marker_applied());
    assert_eq!(environment.saved_value(), Some("light".to_string()));
}
