//! The per-variant visual strategy.

use window_panel_core::Rect;

use crate::error::Result;
use crate::surface::Surface;

use super::PanelState;

/// The execution context a panel runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackMode {
    /// Live, interactive playback: pointer handlers are registered and
    /// animators are driven through their running player.
    #[default]
    Playing,
    /// Non-interactive preview (inspectors, thumbnails): no pointer
    /// handlers, animation clips are sampled directly.
    Preview,
}

/// What an action sees of its panel.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    /// The interactive content surface.
    pub window: &'a Surface,
    /// The panel's own rectangle.
    pub panel_rect: Rect,
    /// Where the panel is running.
    pub mode: PlaybackMode,
}

/// Maps transition progress onto visuals.
///
/// Implementations must be deterministic and idempotent: calling either
/// action twice with the same progress renders the same frame, including
/// exactly 0 and exactly 1.
pub trait WindowAction: Send {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Called once before the first transition, and again on re-attach,
    /// with the state the panel starts in.
    fn attach(&mut self, _ctx: &ActionContext<'_>, _initial: PanelState) -> Result<()> {
        Ok(())
    }

    /// Render the opening transition at `progress`.
    fn open_action(&mut self, ctx: &ActionContext<'_>, progress: f32);

    /// Render the closing transition at `progress`.
    fn close_action(&mut self, ctx: &ActionContext<'_>, progress: f32);
}

impl<T: WindowAction + ?Sized> WindowAction for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn attach(&mut self, ctx: &ActionContext<'_>, initial: PanelState) -> Result<()> {
        (**self).attach(ctx, initial)
    }

    fn open_action(&mut self, ctx: &ActionContext<'_>, progress: f32) {
        (**self).open_action(ctx, progress);
    }

    fn close_action(&mut self, ctx: &ActionContext<'_>, progress: f32) {
        (**self).close_action(ctx, progress);
    }
}
