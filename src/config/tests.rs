//! Configuration unit tests.

use std::path::PathBuf;

use super::*;
use crate::virtual_scroll::{DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT};

#[test]
fn default_config_roundtrip() {
    let cfg = Config::default();
    let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
    let parsed: Config = toml::from_str(&toml_str).expect("deserialize");
    assert!((parsed.list.row_height - DEFAULT_ROW_HEIGHT).abs() < f32::EPSILON);
    assert_eq!(parsed.list.overscan, DEFAULT_OVERSCAN);
    assert_eq!(parsed.data.dir, PathBuf::from("db"));
    assert_eq!(parsed.ui.frame_ms, 16);
    assert_eq!(parsed.ui.scroll_lines, 3);
}

#[test]
fn empty_toml_gives_defaults() {
    let parsed: Config = toml::from_str("").expect("deserialize");
    assert!((parsed.list.row_height - DEFAULT_ROW_HEIGHT).abs() < f32::EPSILON);
    assert_eq!(parsed.list.overscan, DEFAULT_OVERSCAN);
    assert_eq!(parsed.data.dir, PathBuf::from("db"));
}

#[test]
fn partial_toml_uses_defaults() {
    let toml_str = r#"
[list]
row_height = 28.0
"#;
    let parsed: Config = toml::from_str(toml_str).expect("deserialize");
    assert!((parsed.list.row_height - 28.0).abs() < f32::EPSILON);
    // Other fields should be defaults
    assert_eq!(parsed.list.overscan, DEFAULT_OVERSCAN);
    assert_eq!(parsed.ui.frame_ms, 16);
}

#[test]
fn integer_row_height_parses() {
    let toml_str = r#"
[list]
row_height = 32
"#;
    let parsed: Config = toml::from_str(toml_str).expect("deserialize");
    assert!((parsed.list.row_height - 32.0).abs() < f32::EPSILON);
}

#[test]
fn list_config_from_toml() {
    let toml_str = r#"
[list]
row_height = 24.0
overscan = 10
"#;
    let parsed: Config = toml::from_str(toml_str).expect("deserialize");
    let window = parsed.list.window_config();
    assert!((window.row_height - 24.0).abs() < f32::EPSILON);
    assert_eq!(window.overscan, 10);
}

#[test]
fn zero_row_height_clamped_at_use_site() {
    let toml_str = r#"
[list]
row_height = 0.0
"#;
    let parsed: Config = toml::from_str(toml_str).expect("deserialize");
    let window = parsed.list.window_config();
    assert!((window.effective_row_height() - DEFAULT_ROW_HEIGHT).abs() < f32::EPSILON);
}

#[test]
fn data_dir_from_toml() {
    let toml_str = r#"
[data]
dir = "fixtures/publish"
"#;
    let parsed: Config = toml::from_str(toml_str).expect("deserialize");
    assert_eq!(parsed.data.dir, PathBuf::from("fixtures/publish"));
}

#[test]
fn frame_ms_clamped() {
    let toml_str = r#"
[ui]
frame_ms = 500
"#;
    let parsed: Config = toml::from_str(toml_str).expect("deserialize");
    assert_eq!(parsed.ui.frame_ms, 500);
    assert_eq!(parsed.ui.effective_frame_ms(), 100);

    let toml_str2 = r#"
[ui]
frame_ms = 1
"#;
    let parsed2: Config = toml::from_str(toml_str2).expect("deserialize");
    assert_eq!(parsed2.ui.effective_frame_ms(), 4);
}

#[test]
fn scroll_lines_never_zero() {
    let toml_str = r#"
[ui]
scroll_lines = 0
"#;
    let parsed: Config = toml::from_str(toml_str).expect("deserialize");
    assert_eq!(parsed.ui.effective_scroll_lines(), 1);
}

#[test]
fn config_dir_is_not_empty() {
    let dir = config_dir();
    assert!(!dir.as_os_str().is_empty());
}

#[test]
fn config_path_ends_with_toml() {
    let path = config_path();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("toml"));
    let state = state_path();
    assert_eq!(state.extension().and_then(|e| e.to_str()), Some("toml"));
}

#[test]
fn ui_state_roundtrip() {
    let state = UiState {
        route: "/guide/rule".to_owned(),
        scroll_top: 1234.5,
    };
    let toml_str = toml::to_string_pretty(&state).expect("serialize");
    let parsed: UiState = toml::from_str(&toml_str).expect("deserialize");
    assert_eq!(parsed.route, "/guide/rule");
    assert!((parsed.scroll_top - 1234.5).abs() < f32::EPSILON);
}

#[test]
fn ui_state_defaults() {
    let parsed: UiState = toml::from_str("").expect("deserialize");
    assert!(parsed.route.is_empty());
    assert!(parsed.scroll_top.abs() < f32::EPSILON);
}
