//! Animation-graph player interface.
//!
//! The animated panel variant drives an external animation graph. The graph
//! itself is the host's business; this module describes the slice of it a
//! panel needs:
//!
//! - [`Animator`]: the live player (current state, play, cross-fade, advance)
//! - [`AnimatorController`]: the graph definition (layers → states → clips),
//!   used to sample clips directly while previewing
//! - [`AnimationClip`]: something that can pose its target at a given time
//!
//! [`ClipAnimator`] is a minimal player over an [`AnimatorController`], and
//! [`CurveClip`] animates one [`Surface`] property along an
//! [`AnimationCurve`]. Together they are enough to run an animated panel
//! without a host engine.

use std::fmt;
use std::sync::Arc;

use window_panel_core::logging::targets;
use window_panel_core::Point;

use crate::animation::AnimationCurve;
use crate::error::{PanelError, Result};
use crate::surface::Surface;

/// Playback position of the state a layer is currently in.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorStateInfo {
    /// State name.
    pub name: String,
    /// Time in state lengths; 1.0 is the end of the first loop.
    pub normalized_time: f32,
    /// Length of the state's clip in seconds.
    pub length: f32,
}

impl AnimatorStateInfo {
    /// Whether this is the state called `name`.
    #[inline]
    pub fn is_name(&self, name: &str) -> bool {
        self.name == name
    }
}

/// A clip that can pose its bound target.
pub trait AnimationClip: Send + Sync {
    /// Clip length in seconds.
    fn length(&self) -> f32;

    /// Pose the target as it looks `time` seconds into the clip.
    fn sample(&self, time: f32);
}

/// A named state in a layer's state machine.
#[derive(Clone)]
pub struct AnimatorStateDef {
    /// State name, unique within its layer.
    pub name: String,
    /// The clip the state plays.
    pub motion: Option<Arc<dyn AnimationClip>>,
}

impl AnimatorStateDef {
    /// A state playing `clip`.
    pub fn new(name: impl Into<String>, clip: Arc<dyn AnimationClip>) -> Self {
        Self {
            name: name.into(),
            motion: Some(clip),
        }
    }

    /// A state with no motion.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            motion: None,
        }
    }
}

impl fmt::Debug for AnimatorStateDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatorStateDef")
            .field("name", &self.name)
            .field("has_motion", &self.motion.is_some())
            .finish()
    }
}

/// One layer of an animation graph.
#[derive(Debug, Clone, Default)]
pub struct AnimatorLayer {
    /// Layer name.
    pub name: String,
    /// States on this layer.
    pub states: Vec<AnimatorStateDef>,
}

impl AnimatorLayer {
    /// Create an empty layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
        }
    }

    /// Add a state using builder pattern.
    pub fn with_state(mut self, state: AnimatorStateDef) -> Self {
        self.states.push(state);
        self
    }
}

/// An animation graph definition.
#[derive(Debug, Clone, Default)]
pub struct AnimatorController {
    /// Layers, base layer first.
    pub layers: Vec<AnimatorLayer>,
}

impl AnimatorController {
    /// Create a controller from its layers.
    pub fn new(layers: Vec<AnimatorLayer>) -> Self {
        Self { layers }
    }

    /// Find a state by name on a layer.
    pub fn find_state(&self, layer: usize, name: &str) -> Result<&AnimatorStateDef> {
        self.layers
            .get(layer)
            .and_then(|l| l.states.iter().find(|state| state.name == name))
            .ok_or_else(|| PanelError::state_not_found(name, layer))
    }

    /// Resolve the clip a named state plays.
    pub fn clip(&self, layer: usize, name: &str) -> Result<Arc<dyn AnimationClip>> {
        self.find_state(layer, name)?
            .motion
            .clone()
            .ok_or_else(|| PanelError::MissingMotion(name.to_string()))
    }
}

/// A live animation-graph player.
pub trait Animator: Send {
    /// Playback position of `layer`, or `None` if nothing is playing there.
    fn current_state(&self, layer: usize) -> Option<AnimatorStateInfo>;

    /// Switch `layer` to `state`, starting at `normalized_time`.
    fn play(&mut self, state: &str, layer: usize, normalized_time: f32);

    /// Blend `layer` into `state` over `transition_duration` seconds,
    /// starting the target at `normalized_time`.
    fn cross_fade(&mut self, state: &str, transition_duration: f32, layer: usize, normalized_time: f32);

    /// Advance every layer by `delta` seconds.
    fn update(&mut self, delta: f32);

    /// The bound graph, if any.
    fn controller(&self) -> Option<&AnimatorController>;
}

#[derive(Debug, Clone)]
struct LayerPlayback {
    state: String,
    time: f32,
}

/// Minimal player over an [`AnimatorController`].
///
/// Each layer plays one state at a time. Cross-fades are instantaneous: the
/// target state is posed at the requested time straight away. Clips hold
/// their last pose once their length is exceeded.
#[derive(Debug)]
pub struct ClipAnimator {
    controller: AnimatorController,
    playback: Vec<Option<LayerPlayback>>,
}

impl ClipAnimator {
    /// Create a player with nothing playing.
    pub fn new(controller: AnimatorController) -> Self {
        let playback = vec![None; controller.layers.len()];
        Self {
            controller,
            playback,
        }
    }

    fn pose(&self, layer: usize) {
        let Some(Some(playback)) = self.playback.get(layer) else {
            return;
        };
        if let Ok(clip) = self.controller.clip(layer, &playback.state) {
            clip.sample(playback.time.clamp(0.0, clip.length()));
        }
    }
}

impl Animator for ClipAnimator {
    fn current_state(&self, layer: usize) -> Option<AnimatorStateInfo> {
        let playback = self.playback.get(layer)?.as_ref()?;
        let length = self
            .controller
            .clip(layer, &playback.state)
            .map(|clip| clip.length())
            .unwrap_or(0.0);
        let normalized_time = if length > 0.0 {
            playback.time / length
        } else {
            1.0
        };
        Some(AnimatorStateInfo {
            name: playback.state.clone(),
            normalized_time,
            length,
        })
    }

    fn play(&mut self, state: &str, layer: usize, normalized_time: f32) {
        let length = match self.controller.clip(layer, state) {
            Ok(clip) => clip.length(),
            Err(err) => {
                tracing::warn!(target: targets::ANIMATOR, %err, "cannot play state");
                return;
            }
        };
        let Some(slot) = self.playback.get_mut(layer) else {
            return;
        };
        *slot = Some(LayerPlayback {
            state: state.to_string(),
            time: normalized_time * length,
        });
        tracing::trace!(target: targets::ANIMATOR, state, layer, normalized_time, "play");
        self.pose(layer);
    }

    fn cross_fade(&mut self, state: &str, _transition_duration: f32, layer: usize, normalized_time: f32) {
        self.play(state, layer, normalized_time);
    }

    fn update(&mut self, delta: f32) {
        for layer in 0..self.playback.len() {
            if let Some(Some(playback)) = self.playback.get_mut(layer) {
                playback.time += delta;
            }
            self.pose(layer);
        }
    }

    fn controller(&self) -> Option<&AnimatorController> {
        Some(&self.controller)
    }
}

/// The surface property a [`CurveClip`] animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipProperty {
    /// Opacity.
    Alpha,
    /// Horizontal anchored offset.
    PositionX,
    /// Vertical anchored offset.
    PositionY,
}

/// A clip animating one surface property along a curve.
///
/// The curve's time axis is in seconds; the clip length is the time of its
/// last key.
#[derive(Debug, Clone)]
pub struct CurveClip {
    target: Surface,
    property: ClipProperty,
    curve: AnimationCurve,
}

impl CurveClip {
    /// Create a clip posing `property` of `target`.
    pub fn new(target: Surface, property: ClipProperty, curve: AnimationCurve) -> Self {
        Self {
            target,
            property,
            curve,
        }
    }
}

impl AnimationClip for CurveClip {
    fn length(&self) -> f32 {
        self.curve.keys().last().map(|key| key.time).unwrap_or(0.0)
    }

    fn sample(&self, time: f32) {
        let value = self.curve.evaluate(time);
        match self.property {
            ClipProperty::Alpha => self.target.set_alpha(value),
            ClipProperty::PositionX => {
                let y = self.target.anchored_position().y;
                self.target.set_anchored_position(Point::new(value, y));
            }
            ClipProperty::PositionY => {
                let x = self.target.anchored_position().x;
                self.target.set_anchored_position(Point::new(x, value));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade_controller(window: &Surface) -> AnimatorController {
        let open = CurveClip::new(
            window.clone(),
            ClipProperty::Alpha,
            AnimationCurve::linear(0.0, 0.0, 0.5, 1.0),
        );
        let close = CurveClip::new(
            window.clone(),
            ClipProperty::Alpha,
            AnimationCurve::linear(0.0, 1.0, 0.5, 0.0),
        );
        AnimatorController::new(vec![
            AnimatorLayer::new("Base")
                .with_state(AnimatorStateDef::new("Open", Arc::new(open)))
                .with_state(AnimatorStateDef::new("Close", Arc::new(close)))
                .with_state(AnimatorStateDef::empty("Idle")),
        ])
    }

    #[test]
    fn test_controller_lookup() {
        let window = Surface::new("window");
        let controller = fade_controller(&window);

        assert!(controller.find_state(0, "Open").is_ok());
        assert!(matches!(
            controller.find_state(0, "Missing"),
            Err(PanelError::AnimationStateNotFound { .. })
        ));
        assert!(matches!(
            controller.find_state(3, "Open"),
            Err(PanelError::AnimationStateNotFound { layer: 3, .. })
        ));
        assert!(matches!(controller.clip(0, "Idle"), Err(PanelError::MissingMotion(_))));
    }

    #[test]
    fn test_play_and_update() {
        let window = Surface::new("window");
        let mut animator = ClipAnimator::new(fade_controller(&window));
        assert!(animator.current_state(0).is_none());

        animator.play("Open", 0, 0.0);
        let info = animator.current_state(0).unwrap();
        assert!(info.is_name("Open"));
        assert_eq!(info.normalized_time, 0.0);
        assert_eq!(info.length, 0.5);
        assert_eq!(window.alpha(), 0.0);

        animator.update(0.25);
        assert!((animator.current_state(0).unwrap().normalized_time - 0.5).abs() < 1e-5);
        assert!((window.alpha() - 0.5).abs() < 1e-5);

        // Past the end the clip holds its last pose.
        animator.update(10.0);
        assert_eq!(window.alpha(), 1.0);
    }

    #[test]
    fn test_cross_fade_jumps() {
        let window = Surface::new("window");
        let mut animator = ClipAnimator::new(fade_controller(&window));

        animator.cross_fade("Close", 0.0, 0, 1.0);
        assert!(animator.current_state(0).unwrap().is_name("Close"));
        assert_eq!(window.alpha(), 0.0);
    }

    #[test]
    fn test_play_unknown_state_is_ignored() {
        let window = Surface::new("window");
        let mut animator = ClipAnimator::new(fade_controller(&window));
        animator.play("Missing", 0, 0.0);
        assert!(animator.current_state(0).is_none());
    }

    #[test]
    fn test_curve_clip_positions() {
        let window = Surface::new("window");
        let clip = CurveClip::new(
            window.clone(),
            ClipProperty::PositionY,
            AnimationCurve::linear(0.0, -100.0, 1.0, 0.0),
        );
        assert_eq!(clip.length(), 1.0);
        clip.sample(0.0);
        assert_eq!(window.anchored_position(), Point::new(0.0, -100.0));
        clip.sample(1.0);
        assert_eq!(window.anchored_position(), Point::ZERO);
    }
}
