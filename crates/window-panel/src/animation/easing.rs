//! Preset easing functions.
//!
//! A preset maps linear progress in [0, 1] to eased progress. Input outside
//! [0, 1] is clamped; the `Back` presets still overshoot in their output.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Overshoot amount used by the `Back` presets.
const BACK_OVERSHOOT: f32 = 1.70158;

/// Available easing presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
    /// Cubic ease-in.
    EaseInCubic,
    /// Cubic ease-out.
    EaseOutCubic,
    /// Cubic ease-in-out.
    EaseInOutCubic,
    /// Sinusoidal ease-in-out.
    EaseInOutSine,
    /// Hermite smoothstep, `3t² − 2t³`.
    SmoothStep,
    /// Pulls back before moving forward.
    BackIn,
    /// Overshoots the target and settles back.
    BackOut,
}

impl Easing {
    /// Apply the preset to a progress value.
    ///
    /// # Example
    ///
    /// ```
    /// use window_panel::animation::Easing;
    ///
    /// assert_eq!(Easing::Linear.apply(0.5), 0.5);
    /// assert!(Easing::EaseIn.apply(0.5) < 0.5);
    /// assert!(Easing::EaseOut.apply(0.5) > 0.5);
    /// ```
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::BackIn => {
                let c3 = BACK_OVERSHOOT + 1.0;
                c3 * t * t * t - BACK_OVERSHOOT * t * t
            }
            Self::BackOut => {
                let c3 = BACK_OVERSHOOT + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + BACK_OVERSHOOT * u * u
            }
        }
    }

    /// Whether this preset can leave the [0, 1] output range.
    pub fn overshoots(self) -> bool {
        matches!(self, Self::BackIn | Self::BackOut)
    }
}
