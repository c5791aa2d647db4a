//! Keyframed easing curves.
//!
//! An [`AnimationCurve`] is a piecewise cubic Hermite spline through a list of
//! keyframes, each carrying its own in/out tangents. Steep tangents let a
//! curve overshoot its key values, which slide-in panels use for "bouncy"
//! entries. Outside the keyed time range the curve holds its first or last
//! value.

use serde::{Deserialize, Serialize};

use super::easing::Easing;

/// A single key on an [`AnimationCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Position of the key on the time axis.
    pub time: f32,
    /// Curve value at `time`.
    pub value: f32,
    /// Slope arriving at this key.
    #[serde(default)]
    pub in_tangent: f32,
    /// Slope leaving this key.
    #[serde(default)]
    pub out_tangent: f32,
}

impl Keyframe {
    /// A key with flat tangents.
    pub const fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    /// A key with explicit tangents.
    pub const fn with_tangents(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

/// A keyframed curve, evaluated with cubic Hermite interpolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationCurve {
    keys: Vec<Keyframe>,
}

impl AnimationCurve {
    /// Build a curve from keys in any order.
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    /// An S-shaped curve with flat tangents at both ends.
    pub fn ease_in_out(time_start: f32, value_start: f32, time_end: f32, value_end: f32) -> Self {
        Self::new(vec![
            Keyframe::new(time_start, value_start),
            Keyframe::new(time_end, value_end),
        ])
    }

    /// A straight line between two keys.
    pub fn linear(time_start: f32, value_start: f32, time_end: f32, value_end: f32) -> Self {
        let span = time_end - time_start;
        let slope = if span == 0.0 {
            0.0
        } else {
            (value_end - value_start) / span
        };
        Self::new(vec![
            Keyframe::with_tangents(time_start, value_start, slope, slope),
            Keyframe::with_tangents(time_end, value_end, slope, slope),
        ])
    }

    /// The keys, sorted by time.
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Evaluate the curve at `time`.
    ///
    /// An empty curve evaluates to 0; a NaN time evaluates to the first key.
    pub fn evaluate(&self, time: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };

        if time.is_nan() || time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        let upper = self.keys.partition_point(|key| key.time <= time);
        let (Some(k0), Some(k1)) = (
            upper.checked_sub(1).and_then(|i| self.keys.get(i)),
            self.keys.get(upper),
        ) else {
            return last.value;
        };

        let dt = k1.time - k0.time;
        if dt <= 0.0 {
            return k1.value;
        }

        let s = (time - k0.time) / dt;
        let s2 = s * s;
        let s3 = s2 * s;

        let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
        let h10 = s3 - 2.0 * s2 + s;
        let h01 = -2.0 * s3 + 3.0 * s2;
        let h11 = s3 - s2;

        h00 * k0.value + h10 * dt * k0.out_tangent + h01 * k1.value + h11 * dt * k1.in_tangent
    }
}

impl Default for AnimationCurve {
    fn default() -> Self {
        Self::ease_in_out(0.0, 0.0, 1.0, 1.0)
    }
}

/// The easing applied to slide progress: a preset or a keyframed curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingCurve {
    /// A built-in preset.
    Preset(Easing),
    /// A custom keyframed curve.
    Keyframes(AnimationCurve),
}

impl EasingCurve {
    /// Evaluate the eased progress.
    #[inline]
    pub fn evaluate(&self, progress: f32) -> f32 {
        match self {
            Self::Preset(easing) => easing.apply(progress),
            Self::Keyframes(curve) => curve.evaluate(progress),
        }
    }
}

impl Default for EasingCurve {
    fn default() -> Self {
        Self::Keyframes(AnimationCurve::default())
    }
}

impl From<Easing> for EasingCurve {
    fn from(easing: Easing) -> Self {
        Self::Preset(easing)
    }
}

impl From<AnimationCurve> for EasingCurve {
    fn from(curve: AnimationCurve) -> Self {
        Self::Keyframes(curve)
    }
}
