//! Integration tests for panel wiring and persisted configuration.

mod common;

use window_panel::error::SurfaceRole;
use window_panel::prelude::*;

use common::{Harness, init_tracing};

#[derive(Debug, PartialEq)]
struct ConfirmDialog {
    title: String,
}

#[test]
fn test_missing_window_fails_on_transition() {
    init_tracing();
    let gate = Surface::new("panel").with_blocks_input(false);
    let surfaces = PanelSurfaces::new(gate).with_background(Surface::new("background"));
    let mut panel = WindowPanel::builder(surfaces).build().unwrap();

    assert!(!panel.is_ready());
    assert!(matches!(
        panel.open(),
        Err(PanelError::MissingSurface(SurfaceRole::Window))
    ));
    assert!(matches!(
        panel.open_immediately(),
        Err(PanelError::MissingSurface(SurfaceRole::Window))
    ));
    assert!(matches!(
        panel.window::<ConfirmDialog>(),
        Err(PanelError::MissingSurface(SurfaceRole::Window))
    ));
    assert_eq!(panel.state(), PanelState::Closed);
}

#[test]
fn test_missing_background_fails_on_close() {
    init_tracing();
    let gate = Surface::new("panel");
    let surfaces = PanelSurfaces::new(gate).with_window(Surface::new("window"));
    let mut panel = WindowPanel::builder(surfaces).build().unwrap();
    assert_eq!(panel.state(), PanelState::Opened);

    let err = panel.close().unwrap_err();
    assert_eq!(err.to_string(), "Window panel requires a background surface");
    assert_eq!(panel.state(), PanelState::Opened);
}

#[test]
fn test_persisted_state_overrides_gate() {
    let harness = Harness::closed();
    let config = PanelConfig::from_json_str(r#"{ "initial_state": "opened" }"#).unwrap();
    let panel = harness.panel(config);
    assert_eq!(panel.state(), PanelState::Opened);
}

#[test]
fn test_persisted_transient_state_is_fatal() {
    let harness = Harness::closed();
    let config = PanelConfig::from_toml_str(r#"initial_state = "opening""#).unwrap();
    let err = WindowPanel::builder(harness.surfaces())
        .config(config)
        .build()
        .unwrap_err();
    assert!(matches!(err, PanelError::InvalidInitialState(PanelState::Opening)));
}

#[test]
fn test_unrecognized_persisted_state_is_fatal() {
    let err = PanelConfig::from_toml_str(r#"initial_state = "half_open""#).unwrap_err();
    assert!(matches!(err, PanelError::Config(_)));
}

#[test]
fn test_window_component() {
    let harness = Harness::closed();
    harness.window.insert_component(ConfirmDialog {
        title: "Quit?".into(),
    });
    let panel = harness.panel(PanelConfig::default());

    let dialog = panel.window::<ConfirmDialog>().unwrap();
    assert_eq!(dialog.title, "Quit?");
    assert!(matches!(
        panel.window::<u32>(),
        Err(PanelError::ComponentNotFound(_))
    ));
}

#[test]
fn test_config_round_trip_drives_panel() {
    let harness = Harness::closed();
    let original = PanelConfig::default()
        .with_durations(0.1, 0.2)
        .with_variant(VariantConfig::SlideIn {
            entry_outer: Outer::Left,
            exit_outer: Outer::Up,
            easing_curve: Easing::EaseOutCubic.into(),
        });
    let restored = PanelConfig::from_toml_str(&original.to_toml_string().unwrap()).unwrap();
    assert_eq!(restored, original);

    let mut panel = harness.panel(restored);
    panel.open().unwrap();
    assert_eq!(
        harness.window.anchored_position(),
        Point::new(-common::PANEL_RECT.width(), 0.0)
    );
    assert_eq!(panel.config().close_duration, 0.2);
}

#[test]
fn test_debug_output_names_state() {
    let harness = Harness::closed();
    let panel = harness.panel(PanelConfig::default());
    let debug = format!("{panel:?}");
    assert!(debug.contains("Closed"));
    assert!(debug.contains("fade"));
}
