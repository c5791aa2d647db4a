//! The per-tick transition process.
//!
//! A transition is a resumable sequence of steps. Each call to
//! [`TransitionProcess::advance`] runs the process up to its next suspension
//! point and reports what to render:
//!
//! 1. On start: progress 0 and the direction's starting background opacity.
//! 2. First tick: the start time is recorded.
//! 3. Every tick while `elapsed < duration`: `clamp01(elapsed / duration)`.
//! 4. The tick the deadline is reached: progress exactly 1 and the terminal
//!    background opacity, whatever the frame timing was.
//! 5. The following tick: completion.
//!
//! A duration of zero or less skips step 3.

use std::time::Instant;

use window_panel_core::logging::{span_names, targets};
use window_panel_core::PerfSpan;

/// Which way a transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards Opened.
    Open,
    /// Towards Closed.
    Close,
}

impl Direction {
    /// Background opacity for a given progress.
    #[inline]
    pub fn background_alpha(self, progress: f32) -> f32 {
        match self {
            Self::Open => progress,
            Self::Close => 1.0 - progress,
        }
    }
}

/// What a single advance produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Render this progress and suspend until the next tick.
    Progress {
        /// Progress handed to the variant's action.
        progress: f32,
        /// Opacity of the background overlay.
        background: f32,
    },
    /// The transition finished; run its completion path.
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Starting,
    Running { started: Instant },
    Finishing,
    Done,
}

/// A single open or close transition in flight.
#[derive(Debug)]
pub struct TransitionProcess {
    direction: Direction,
    duration: f32,
    phase: Phase,
    _span: PerfSpan,
}

impl TransitionProcess {
    /// Start a transition and return the frame to render immediately.
    ///
    /// `duration` is in seconds of unscaled time.
    pub fn start(direction: Direction, duration: f32) -> (Self, Step) {
        tracing::debug!(target: targets::TRANSITION, ?direction, duration, "transition started");
        let process = Self {
            direction,
            duration,
            phase: Phase::Starting,
            _span: PerfSpan::new(span_names::TRANSITION),
        };
        let first = Step::Progress {
            progress: 0.0,
            background: direction.background_alpha(0.0),
        };
        (process, first)
    }

    /// The direction of this transition.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Configured duration in seconds.
    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Whether the process has reported completion.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Resume the process for one tick.
    pub fn advance(&mut self, now: Instant) -> Step {
        match self.phase {
            Phase::Starting => {
                self.phase = Phase::Running { started: now };
                self.step_running(0.0)
            }
            Phase::Running { started } => {
                let elapsed = now.saturating_duration_since(started).as_secs_f32();
                self.step_running(elapsed)
            }
            Phase::Finishing => {
                tracing::debug!(target: targets::TRANSITION, direction = ?self.direction, "transition complete");
                self.phase = Phase::Done;
                Step::Complete
            }
            Phase::Done => Step::Complete,
        }
    }

    fn step_running(&mut self, elapsed: f32) -> Step {
        if elapsed < self.duration {
            let progress = (elapsed / self.duration).clamp(0.0, 1.0);
            tracing::trace!(target: targets::TRANSITION, progress, "transition tick");
            return Step::Progress {
                progress,
                background: self.direction.background_alpha(progress),
            };
        }

        self.phase = Phase::Finishing;
        Step::Progress {
            progress: 1.0,
            background: self.direction.background_alpha(1.0),
        }
    }
}
