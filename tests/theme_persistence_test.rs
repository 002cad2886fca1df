//! Theme persistence across dashboard sessions

mod common;

use common::builders::ReadingBuilder;
use std::time::Instant;
use telemetry_dashboard::config::{
    DashboardConfig, FilePreferenceStore, PreferenceStore, DARK_MODE_DISABLED, DARK_MODE_KEY,
};
use telemetry_dashboard::dashboard::series::DARK_TICK_COLOR;
use telemetry_dashboard::dashboard::{DashboardState, TickSnapshot};

fn open_state(path: &std::path::Path) -> DashboardState {
    let store = FilePreferenceStore::open(path).unwrap();
    DashboardState::new(&DashboardConfig::default(), Box::new(store))
}

#[test]
fn test_dark_mode_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut first = open_state(&path);
    assert!(!first.is_dark());
    first.set_dark(true);
    drop(first);

    let second = open_state(&path);
    assert!(second.is_dark());
    assert!(second
        .charts()
        .iter()
        .all(|c| c.style().tick_color == DARK_TICK_COLOR));
}

#[test]
fn test_toggle_off_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut state = open_state(&path);
    state.set_dark(true);
    state.set_dark(false);

    let store = FilePreferenceStore::open(&path).unwrap();
    assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some(DARK_MODE_DISABLED));
}

#[test]
fn test_new_entries_follow_current_theme() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = open_state(&dir.path().join("preferences.json"));

    state.set_dark(true);
    state.apply_tick(
        TickSnapshot::new(ReadingBuilder::new().build(), vec![], "12:00:00"),
        Instant::now(),
    );

    assert!(state.history().iter().all(|e| e.dark));
}
