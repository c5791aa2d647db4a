//! Easing support for panel transitions.
//!
//! Easing maps a normalized progress value `t` (0.0 to 1.0) to the value a
//! variant actually renders. Presets clamp their input; keyframed curves may
//! overshoot when their tangents ask for it.
//!
//! # Example
//!
//! ```
//! use window_panel::animation::{AnimationCurve, Easing, EasingCurve};
//!
//! let preset = EasingCurve::from(Easing::EaseOut);
//! assert!(preset.evaluate(0.5) > 0.5);
//!
//! let curve = EasingCurve::from(AnimationCurve::ease_in_out(0.0, 0.0, 1.0, 1.0));
//! assert_eq!(curve.evaluate(1.0), 1.0);
//! ```

mod curve;
mod easing;

pub use curve::{AnimationCurve, EasingCurve, Keyframe};
pub use easing::Easing;
