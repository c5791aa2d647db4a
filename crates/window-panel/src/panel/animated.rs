//! Window panel driven by an animation graph.
//!
//! Opening and closing are two named states of the graph. While playing,
//! the live player is scrubbed so its normalized time tracks the transition
//! progress. While previewing, the graph is not running, so the state's clip
//! is looked up in the controller and sampled directly.

use std::fmt;

use window_panel_core::logging::targets;

use crate::animator::Animator;
use crate::error::{PanelError, Result};

use super::action::{ActionContext, PlaybackMode, WindowAction};
use super::PanelState;

/// Default name of the opening state.
pub const DEFAULT_OPEN_STATE: &str = "Open";
/// Default name of the closing state.
pub const DEFAULT_CLOSE_STATE: &str = "Close";

/// Plays the open/close states of an animation graph.
pub struct AnimatedAction {
    animator: Box<dyn Animator>,
    open_state_name: String,
    close_state_name: String,
    layer: usize,
}

impl AnimatedAction {
    /// Drive `animator` with the default "Open" and "Close" state names.
    pub fn new(animator: Box<dyn Animator>) -> Self {
        Self {
            animator,
            open_state_name: DEFAULT_OPEN_STATE.to_string(),
            close_state_name: DEFAULT_CLOSE_STATE.to_string(),
            layer: 0,
        }
    }

    /// Set the state names using builder pattern.
    pub fn with_state_names(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open_state_name = open.into();
        self.close_state_name = close.into();
        self
    }

    /// The opening state name.
    pub fn open_state_name(&self) -> &str {
        &self.open_state_name
    }

    /// The closing state name.
    pub fn close_state_name(&self) -> &str {
        &self.close_state_name
    }

    /// The layer the states live on.
    pub fn layer(&self) -> usize {
        self.layer
    }

    /// The wrapped player.
    pub fn animator(&self) -> &dyn Animator {
        self.animator.as_ref()
    }

    /// Pose the graph at `progress` through `state` without playing it.
    fn jump_to(&mut self, mode: PlaybackMode, state: &str, progress: f32) -> Result<()> {
        match mode {
            PlaybackMode::Preview => {
                let controller = self.animator.controller().ok_or(PanelError::NoController)?;
                let clip = controller.clip(self.layer, state)?;
                clip.sample(clip.length() * progress);
            }
            PlaybackMode::Playing => {
                self.animator.cross_fade(state, 0.0, self.layer, progress);
            }
        }
        Ok(())
    }

    fn drive(&mut self, mode: PlaybackMode, state: &str, progress: f32) {
        if mode == PlaybackMode::Preview {
            if let Err(err) = self.jump_to(mode, state, progress) {
                tracing::error!(target: targets::ANIMATOR, %err, state, "cannot preview state");
            }
            return;
        }

        let on_state = self
            .animator
            .current_state(self.layer)
            .is_some_and(|info| info.is_name(state));
        if !on_state {
            self.animator.play(state, self.layer, 0.0);
        }

        match self.animator.current_state(self.layer) {
            Some(info) if info.is_name(state) => {
                self.animator
                    .update((progress - info.normalized_time) * info.length);
            }
            _ => {
                tracing::warn!(target: targets::ANIMATOR, state, "animator did not enter state");
            }
        }
    }
}

impl WindowAction for AnimatedAction {
    fn name(&self) -> &'static str {
        "animated"
    }

    fn attach(&mut self, ctx: &ActionContext<'_>, initial: PanelState) -> Result<()> {
        let state = match initial {
            PanelState::Opened => self.open_state_name.clone(),
            PanelState::Closed => self.close_state_name.clone(),
            PanelState::Opening | PanelState::Closing => return Ok(()),
        };
        self.jump_to(ctx.mode, &state, 1.0)
    }

    fn open_action(&mut self, ctx: &ActionContext<'_>, progress: f32) {
        let state = self.open_state_name.clone();
        self.drive(ctx.mode, &state, progress);
    }

    fn close_action(&mut self, ctx: &ActionContext<'_>, progress: f32) {
        let state = self.close_state_name.clone();
        self.drive(ctx.mode, &state, progress);
    }
}

impl fmt::Debug for AnimatedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedAction")
            .field("open_state_name", &self.open_state_name)
            .field("close_state_name", &self.close_state_name)
            .field("layer", &self.layer)
            .finish_non_exhaustive()
    }
}
