//! Persisted panel configuration.
//!
//! A [`PanelConfig`] is what a scene file stores per panel instance: timing,
//! click behaviour, the initial state and the variant with its own fields.
//! It round-trips through JSON and TOML.
//!
//! ```
//! use window_panel::config::{PanelConfig, VariantConfig};
//!
//! let config = PanelConfig::from_toml_str(r#"
//!     open_duration = 0.25
//!     close_on_background_clicked = true
//!
//!     [variant]
//!     kind = "slide_in"
//!     entry_outer = "up"
//! "#).unwrap();
//!
//! assert_eq!(config.open_duration, 0.25);
//! assert_eq!(config.close_duration, 0.4);
//! assert!(matches!(config.variant, VariantConfig::SlideIn { .. }));
//! ```

use serde::{Deserialize, Serialize};
use window_panel_core::logging::targets;

use crate::animation::EasingCurve;
use crate::animator::Animator;
use crate::error::{PanelError, Result};
use crate::panel::animated::{DEFAULT_CLOSE_STATE, DEFAULT_OPEN_STATE};
use crate::panel::{AnimatedAction, FadeAction, Outer, PanelState, SlideInAction, WindowAction};

/// Default open/close duration in seconds.
pub const DEFAULT_DURATION: f32 = 0.4;

fn default_duration() -> f32 {
    DEFAULT_DURATION
}

fn default_open_state() -> String {
    DEFAULT_OPEN_STATE.to_string()
}

fn default_close_state() -> String {
    DEFAULT_CLOSE_STATE.to_string()
}

/// Per-instance panel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Seconds the opening transition takes.
    pub open_duration: f32,
    /// Seconds the closing transition takes.
    pub close_duration: f32,
    /// Close when the background is clicked while opened.
    pub close_on_background_clicked: bool,
    /// Finish opening at once when the background is clicked while opening.
    pub skip_opening_on_clicked: bool,
    /// State to start in; derived from the panel gate when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_state: Option<PanelState>,
    /// The visual variant.
    pub variant: VariantConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            open_duration: DEFAULT_DURATION,
            close_duration: DEFAULT_DURATION,
            close_on_background_clicked: false,
            skip_opening_on_clicked: false,
            initial_state: None,
            variant: VariantConfig::default(),
        }
    }
}

impl PanelConfig {
    /// Parse a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config = serde_json::from_str(source).map_err(PanelError::config)?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded panel config from JSON");
        Ok(config)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = toml::from_str(source).map_err(PanelError::config)?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded panel config from TOML");
        Ok(config)
    }

    /// Serialize as pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(PanelError::config)
    }

    /// Serialize as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(PanelError::config)
    }

    /// Set both durations using builder pattern.
    pub fn with_durations(mut self, open: f32, close: f32) -> Self {
        self.open_duration = open;
        self.close_duration = close;
        self
    }

    /// Set the initial state using builder pattern.
    pub fn with_initial_state(mut self, state: PanelState) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the variant using builder pattern.
    pub fn with_variant(mut self, variant: VariantConfig) -> Self {
        self.variant = variant;
        self
    }
}

/// Variant-specific settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VariantConfig {
    /// Cross-fade the window.
    #[default]
    Fade,
    /// Slide the window in from a screen edge.
    SlideIn {
        #[serde(default)]
        entry_outer: Outer,
        #[serde(default)]
        exit_outer: Outer,
        #[serde(default)]
        easing_curve: EasingCurve,
    },
    /// Play states of an animation graph.
    Animated {
        #[serde(default = "default_open_state")]
        open_state_name: String,
        #[serde(default = "default_close_state")]
        close_state_name: String,
    },
}

impl VariantConfig {
    /// Build the action this variant describes.
    ///
    /// The animated variant needs the host's animator; the others ignore it.
    pub fn build_action(&self, animator: Option<Box<dyn Animator>>) -> Result<Box<dyn WindowAction>> {
        let action: Box<dyn WindowAction> = match self {
            Self::Fade => Box::new(FadeAction::new()),
            Self::SlideIn {
                entry_outer,
                exit_outer,
                easing_curve,
            } => Box::new(
                SlideInAction::new()
                    .with_entry(*entry_outer)
                    .with_exit(*exit_outer)
                    .with_easing(easing_curve.clone()),
            ),
            Self::Animated {
                open_state_name,
                close_state_name,
            } => {
                let animator = animator
                    .ok_or_else(|| PanelError::config("animated panel requires an animator"))?;
                Box::new(
                    AnimatedAction::new(animator)
                        .with_state_names(open_state_name.clone(), close_state_name.clone()),
                )
            }
        };
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AnimationCurve, Easing};

    #[test]
    fn test_defaults() {
        let config = PanelConfig::default();
        assert_eq!(config.open_duration, 0.4);
        assert_eq!(config.close_duration, 0.4);
        assert!(!config.close_on_background_clicked);
        assert!(!config.skip_opening_on_clicked);
        assert_eq!(config.initial_state, None);
        assert_eq!(config.variant, VariantConfig::Fade);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(PanelConfig::from_json_str("{}").unwrap(), PanelConfig::default());
        assert_eq!(PanelConfig::from_toml_str("").unwrap(), PanelConfig::default());
    }

    #[test]
    fn test_json_round_trip_slide_in() {
        let config = PanelConfig::default()
            .with_durations(0.2, 0.3)
            .with_initial_state(PanelState::Opened)
            .with_variant(VariantConfig::SlideIn {
                entry_outer: Outer::Up,
                exit_outer: Outer::Left,
                easing_curve: EasingCurve::Preset(Easing::EaseOutCubic),
            });

        let json = config.to_json_string().unwrap();
        assert_eq!(PanelConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_toml_round_trip_keyframes() {
        let config = PanelConfig::default().with_variant(VariantConfig::SlideIn {
            entry_outer: Outer::Down,
            exit_outer: Outer::Right,
            easing_curve: EasingCurve::Keyframes(AnimationCurve::linear(0.0, 0.0, 1.0, 1.0)),
        });

        let toml = config.to_toml_string().unwrap();
        assert_eq!(PanelConfig::from_toml_str(&toml).unwrap(), config);
    }

    #[test]
    fn test_animated_defaults() {
        let config = PanelConfig::from_json_str(r#"{ "variant": { "kind": "animated" } }"#).unwrap();
        assert_eq!(
            config.variant,
            VariantConfig::Animated {
                open_state_name: "Open".to_string(),
                close_state_name: "Close".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_initial_state_is_config_error() {
        let err = PanelConfig::from_json_str(r#"{ "initial_state": "ajar" }"#).unwrap_err();
        assert!(matches!(err, PanelError::Config(_)));
    }

    #[test]
    fn test_unknown_variant_is_config_error() {
        let err = PanelConfig::from_toml_str("[variant]\nkind = \"spin\"\n").unwrap_err();
        assert!(matches!(err, PanelError::Config(_)));
    }

    #[test]
    fn test_build_action() {
        assert_eq!(VariantConfig::Fade.build_action(None).unwrap().name(), "fade");

        let slide = VariantConfig::SlideIn {
            entry_outer: Outer::Right,
            exit_outer: Outer::Right,
            easing_curve: EasingCurve::default(),
        };
        assert_eq!(slide.build_action(None).unwrap().name(), "slide_in");

        let animated = VariantConfig::Animated {
            open_state_name: "Open".to_string(),
            close_state_name: "Close".to_string(),
        };
        assert!(matches!(animated.build_action(None), Err(PanelError::Config(_))));
    }
}
