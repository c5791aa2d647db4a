//! Window panel that slides in from off-screen.
//!
//! The window travels between an off-screen anchored position and the
//! centre (zero offset). Entry and exit edges are configured separately, so
//! a panel can, for example, drop in from the top and leave to the right.

use serde::{Deserialize, Serialize};
use window_panel_core::{Point, Rect};

use crate::animation::EasingCurve;
use crate::error::Result;

use super::action::{ActionContext, WindowAction};
use super::PanelState;

/// The screen edge a window is parked behind while hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outer {
    /// Above the panel.
    Up,
    /// Below the panel.
    Down,
    /// Left of the panel.
    Left,
    /// Right of the panel.
    #[default]
    Right,
}

impl Outer {
    /// Anchored position that parks a window behind this edge of `panel`.
    ///
    /// Up and Right are positive offsets; Down and Left are negative.
    pub fn anchored_position(self, panel: Rect) -> Point {
        match self {
            Self::Up => Point::new(0.0, panel.height()),
            Self::Down => Point::new(0.0, -panel.height()),
            Self::Left => Point::new(-panel.width(), 0.0),
            Self::Right => Point::new(panel.width(), 0.0),
        }
    }
}

/// Slides the window surface between an edge and the centre.
#[derive(Debug, Clone, Default)]
pub struct SlideInAction {
    entry_outer: Outer,
    exit_outer: Outer,
    easing_curve: EasingCurve,
    panel_rect: Option<Rect>,
}

impl SlideInAction {
    /// Create a slide action entering and leaving on the right, with the
    /// default ease-in-out curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry edge using builder pattern.
    pub fn with_entry(mut self, outer: Outer) -> Self {
        self.entry_outer = outer;
        self
    }

    /// Set the exit edge using builder pattern.
    pub fn with_exit(mut self, outer: Outer) -> Self {
        self.exit_outer = outer;
        self
    }

    /// Set the easing curve using builder pattern.
    pub fn with_easing(mut self, curve: impl Into<EasingCurve>) -> Self {
        self.easing_curve = curve.into();
        self
    }

    /// The entry edge.
    pub fn entry_outer(&self) -> Outer {
        self.entry_outer
    }

    /// The exit edge.
    pub fn exit_outer(&self) -> Outer {
        self.exit_outer
    }

    /// The easing curve.
    pub fn easing_curve(&self) -> &EasingCurve {
        &self.easing_curve
    }

    fn panel_rect(&self, ctx: &ActionContext<'_>) -> Rect {
        self.panel_rect.unwrap_or(ctx.panel_rect)
    }
}

impl WindowAction for SlideInAction {
    fn name(&self) -> &'static str {
        "slide_in"
    }

    fn attach(&mut self, ctx: &ActionContext<'_>, _initial: PanelState) -> Result<()> {
        self.panel_rect = Some(ctx.panel_rect);
        Ok(())
    }

    fn open_action(&mut self, ctx: &ActionContext<'_>, progress: f32) {
        let start = self.entry_outer.anchored_position(self.panel_rect(ctx));
        let t = self.easing_curve.evaluate(progress);
        ctx.window
            .set_anchored_position(start.lerp_unclamped(Point::ZERO, t));
    }

    fn close_action(&mut self, ctx: &ActionContext<'_>, progress: f32) {
        let end = self.exit_outer.anchored_position(self.panel_rect(ctx));
        let t = self.easing_curve.evaluate(progress);
        ctx.window
            .set_anchored_position(Point::ZERO.lerp_unclamped(end, t));
    }
}
