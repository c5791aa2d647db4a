//! Cross-fading window panel.

use super::action::{ActionContext, WindowAction};

/// Fades the window surface in and out.
#[derive(Debug, Clone, Copy, Default)]
pub struct FadeAction;

impl FadeAction {
    /// Create a fade action.
    pub fn new() -> Self {
        Self
    }
}

impl WindowAction for FadeAction {
    fn name(&self) -> &'static str {
        "fade"
    }

    fn open_action(&mut self, ctx: &ActionContext<'_>, progress: f32) {
        ctx.window.set_alpha(progress);
    }

    fn close_action(&mut self, ctx: &ActionContext<'_>, progress: f32) {
        ctx.window.set_alpha(1.0 - progress);
    }
}
