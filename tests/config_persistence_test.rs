//! Persistence round-trip tests for app state and config files

mod common;

use flowcanvas::config::{AppConfig, AppState};
use flowcanvas::graph::DemoGraph;

#[test]
fn test_app_state_round_trips_through_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app_state.json");

    let mut state = AppState::default();
    state.last_demo = DemoGraph::Branching;
    state.ui_preferences.dark_mode = false;
    state.ui_preferences.font_scale = 1.25;

    state.save_to(&path).expect("save app state");
    let loaded = AppState::load_from(&path).expect("load app state");

    assert_eq!(loaded.last_demo, DemoGraph::Branching);
    assert!(!loaded.ui_preferences.dark_mode);
    assert_eq!(loaded.ui_preferences.font_scale, 1.25);
}

#[test]
fn test_missing_app_state_falls_back_to_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let loaded = AppState::load_from(&dir.path().join("nope.json")).expect("load");
    assert_eq!(loaded.last_demo, DemoGraph::Linear);
}

#[test]
fn test_corrupt_app_state_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app_state.json");
    std::fs::write(&path, "not json at all").expect("write");
    assert!(AppState::load_from(&path).is_err());
}

#[test]
fn test_config_loads_from_toml_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[window]\nwidth = 1600.0\nheight = 900.0\n\n[canvas]\nshow_grid = false\ngrid_spacing = 40.0\n",
    )
    .expect("write");

    let config = AppConfig::load_from(&path).expect("load config");
    assert_eq!(config.window.width, 1600.0);
    assert_eq!(config.window.height, 900.0);
    assert!(!config.canvas.show_grid);
    assert_eq!(config.canvas.grid_spacing, 40.0);
}
