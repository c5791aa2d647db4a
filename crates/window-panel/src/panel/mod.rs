//! The window panel state machine.
//!
//! A [`WindowPanel`] owns three surfaces and a [`WindowAction`]:
//!
//! - the **panel gate**: opacity and input blocking of the whole panel, and
//!   the rectangle variants measure against
//! - the **window**: the interactive content
//! - the **background**: the dimming overlay, which also reports clicks
//!
//! `open`/`close` start a transition that the host advances by calling
//! [`WindowPanel::tick`] once per frame. Each tick hands the variant a
//! progress value and sets the background opacity to match it. The
//! immediate variants skip the animation and apply the end state at once.
//!
//! # Invariants
//!
//! - At most one transition is in flight; starting another cancels it
//!   without running its completion path.
//! - Background opacity equals transition progress (0 closed, 1 opened).
//! - The window blocks input only once fully Opened; the gate blocks input
//!   from the moment Opening starts until the panel is fully Closed.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use window_panel::prelude::*;
//!
//! let clock = ManualClock::new();
//! let surfaces = PanelSurfaces::new(Surface::new("panel").with_blocks_input(false))
//!     .with_window(Surface::new("window"))
//!     .with_background(Surface::new("background"));
//!
//! let mut panel = WindowPanel::builder(surfaces)
//!     .action(FadeAction::new())
//!     .clock(Arc::new(clock.clone()))
//!     .build()
//!     .unwrap();
//!
//! panel.open().unwrap();
//! panel.tick().unwrap();
//! clock.advance_secs(0.4);
//! panel.tick().unwrap();
//! panel.tick().unwrap();
//! assert_eq!(panel.state(), PanelState::Opened);
//! ```

pub(crate) mod action;
pub(crate) mod animated;
mod fade;
mod requests;
mod slide_in;
mod state;
mod transition;

use std::fmt;
use std::sync::Arc;

use window_panel_core::logging::targets;
use window_panel_core::{Clock, ConnectionId, Signal, SystemClock};

use crate::animator::Animator;
use crate::config::PanelConfig;
use crate::error::{PanelError, Result, SurfaceRole};
use crate::surface::Surface;

pub use action::{ActionContext, PlaybackMode, WindowAction};
pub use animated::AnimatedAction;
pub use fade::FadeAction;
pub use requests::{PanelCommand, PanelRequests};
pub use slide_in::{Outer, SlideInAction};
pub use state::PanelState;
pub use transition::{Direction, Step, TransitionProcess};

/// Upper bound on commands drained in one go, so two callbacks that keep
/// re-queueing immediate commands cannot spin forever.
const MAX_REQUESTS_PER_DRAIN: usize = 64;

/// Called once when a transition completes.
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// The surfaces a panel drives.
#[derive(Debug, Clone)]
pub struct PanelSurfaces {
    /// The panel's own gate.
    pub gate: Surface,
    /// The interactive content.
    pub window: Option<Surface>,
    /// The dimming overlay.
    pub background: Option<Surface>,
}

impl PanelSurfaces {
    /// Surfaces with only the gate wired up.
    pub fn new(gate: Surface) -> Self {
        Self {
            gate,
            window: None,
            background: None,
        }
    }

    /// Set the window surface using builder pattern.
    pub fn with_window(mut self, window: Surface) -> Self {
        self.window = Some(window);
        self
    }

    /// Set the background surface using builder pattern.
    pub fn with_background(mut self, background: Surface) -> Self {
        self.background = Some(background);
        self
    }

    /// Check that every required surface is present.
    pub fn validate(&self) -> Result<()> {
        if self.window.is_none() {
            return Err(PanelError::MissingSurface(SurfaceRole::Window));
        }
        if self.background.is_none() {
            return Err(PanelError::MissingSurface(SurfaceRole::Background));
        }
        Ok(())
    }
}

struct ActiveTransition {
    process: TransitionProcess,
    on_completed: Option<CompletionCallback>,
}

/// Builder for [`WindowPanel`].
pub struct WindowPanelBuilder {
    surfaces: PanelSurfaces,
    config: PanelConfig,
    action: Option<Box<dyn WindowAction>>,
    animator: Option<Box<dyn Animator>>,
    clock: Arc<dyn Clock>,
    mode: PlaybackMode,
}

impl WindowPanelBuilder {
    /// Use these settings. Unless [`action`](Self::action) is also given,
    /// the variant is built from `config.variant`.
    pub fn config(mut self, config: PanelConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this action instead of the configured variant.
    pub fn action(mut self, action: impl WindowAction + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    /// The animator an animated variant plays.
    pub fn animator(mut self, animator: Box<dyn Animator>) -> Self {
        self.animator = Some(animator);
        self
    }

    /// The unscaled time source. Defaults to [`SystemClock`].
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Where the panel runs. Defaults to [`PlaybackMode::Playing`].
    pub fn mode(mut self, mode: PlaybackMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build and attach the panel.
    pub fn build(self) -> Result<WindowPanel> {
        let action = match self.action {
            Some(action) => action,
            None => self.config.variant.build_action(self.animator)?,
        };

        let mut panel = WindowPanel {
            state: PanelState::Closed,
            config: self.config,
            surfaces: self.surfaces,
            action,
            clock: self.clock,
            mode: self.mode,
            process: None,
            requests: PanelRequests::new(),
            background_connection: None,
            pre_open: Signal::new(),
            opened: Signal::new(),
            pre_close: Signal::new(),
            closed: Signal::new(),
            state_changed: Signal::new(),
        };
        panel.attach()?;
        Ok(panel)
    }
}

/// A UI panel with animated open/close transitions.
pub struct WindowPanel {
    state: PanelState,
    config: PanelConfig,
    surfaces: PanelSurfaces,
    action: Box<dyn WindowAction>,
    clock: Arc<dyn Clock>,
    mode: PlaybackMode,
    process: Option<ActiveTransition>,
    requests: PanelRequests,
    background_connection: Option<ConnectionId>,
    pre_open: Signal<()>,
    opened: Signal<()>,
    pre_close: Signal<()>,
    closed: Signal<()>,
    state_changed: Signal<PanelState>,
}

impl WindowPanel {
    /// Start building a panel over `surfaces`.
    pub fn builder(surfaces: PanelSurfaces) -> WindowPanelBuilder {
        WindowPanelBuilder {
            surfaces,
            config: PanelConfig::default(),
            action: None,
            animator: None,
            clock: Arc::new(SystemClock),
            mode: PlaybackMode::default(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Whether a transition is in flight.
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.process.is_some()
    }

    /// Direction of the transition in flight, if any.
    pub fn transition_direction(&self) -> Option<Direction> {
        self.process.as_ref().map(|active| active.process.direction())
    }

    /// Whether the window and background surfaces are both wired up.
    pub fn is_ready(&self) -> bool {
        self.surfaces.validate().is_ok()
    }

    /// The panel settings.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// The surfaces this panel drives.
    pub fn surfaces(&self) -> &PanelSurfaces {
        &self.surfaces
    }

    /// The playback mode.
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Name of the variant in use.
    pub fn variant_name(&self) -> &'static str {
        self.action.name()
    }

    /// Set the opening duration in seconds.
    ///
    /// Takes effect from the next opening transition.
    pub fn set_open_duration(&mut self, seconds: f32) {
        self.config.open_duration = seconds;
    }

    /// Set the closing duration in seconds.
    ///
    /// Takes effect from the next closing transition.
    pub fn set_close_duration(&mut self, seconds: f32) {
        self.config.close_duration = seconds;
    }

    /// Toggle closing on background clicks.
    pub fn set_close_on_background_clicked(&mut self, enabled: bool) {
        self.config.close_on_background_clicked = enabled;
    }

    /// Toggle finishing the opening transition on background clicks.
    pub fn set_skip_opening_on_clicked(&mut self, enabled: bool) {
        self.config.skip_opening_on_clicked = enabled;
    }

    /// A handle for queueing commands from callbacks.
    pub fn requests(&self) -> PanelRequests {
        self.requests.clone()
    }

    /// The component of type `T` attached to the window surface.
    pub fn window<T: std::any::Any + Send + Sync>(&self) -> Result<Arc<T>> {
        let window = self
            .surfaces
            .window
            .as_ref()
            .ok_or(PanelError::MissingSurface(SurfaceRole::Window))?;
        window
            .component::<T>()
            .ok_or(PanelError::ComponentNotFound(std::any::type_name::<T>()))
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Emitted before the panel starts opening.
    pub fn pre_open(&self) -> &Signal<()> {
        &self.pre_open
    }

    /// Emitted after the panel is fully opened.
    pub fn opened(&self) -> &Signal<()> {
        &self.opened
    }

    /// Emitted before the panel starts closing.
    pub fn pre_close(&self) -> &Signal<()> {
        &self.pre_close
    }

    /// Emitted after the panel is fully closed.
    pub fn closed(&self) -> &Signal<()> {
        &self.closed
    }

    /// Emitted with the new state on every state change.
    pub fn state_changed(&self) -> &Signal<PanelState> {
        &self.state_changed
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Start opening.
    ///
    /// Does nothing (with a warning) if already opening or opened.
    pub fn open(&mut self) -> Result<()> {
        self.start_open(None)?;
        self.process_requests()
    }

    /// Start opening; `on_completed` runs once the panel is fully opened.
    ///
    /// `on_completed` is dropped without running if the transition is
    /// cancelled.
    pub fn open_with(&mut self, on_completed: impl FnOnce() + Send + 'static) -> Result<()> {
        self.start_open(Some(Box::new(on_completed)))?;
        self.process_requests()
    }

    /// Start closing.
    ///
    /// Does nothing (with a warning) if already closing or closed.
    pub fn close(&mut self) -> Result<()> {
        self.start_close(None)?;
        self.process_requests()
    }

    /// Start closing; `on_completed` runs once the panel is fully closed.
    pub fn close_with(&mut self, on_completed: impl FnOnce() + Send + 'static) -> Result<()> {
        self.start_close(Some(Box::new(on_completed)))?;
        self.process_requests()
    }

    /// Snap to Opened, cancelling any transition in flight.
    pub fn open_immediately(&mut self) -> Result<()> {
        self.snap_open()?;
        self.process_requests()
    }

    /// Snap to Closed, cancelling any transition in flight.
    pub fn close_immediately(&mut self) -> Result<()> {
        self.snap_close()?;
        self.process_requests()
    }

    /// Stop the transition in flight without completing it.
    ///
    /// The state is left as it is; use this when the host disables the
    /// panel mid-transition.
    pub fn cancel_transition(&mut self) {
        if let Some(active) = self.process.take() {
            tracing::debug!(
                target: targets::PANEL,
                direction = ?active.process.direction(),
                "transition cancelled"
            );
        }
    }

    /// Re-read the initial state and re-attach the variant.
    ///
    /// Any transition in flight is cancelled and queued commands are
    /// discarded.
    pub fn reattach(&mut self) -> Result<()> {
        self.cancel_transition();
        self.requests.clear();
        self.attach()
    }

    /// Advance the transition in flight by one frame.
    ///
    /// Queued commands are handled first, then again after any completion
    /// callbacks have run.
    pub fn tick(&mut self) -> Result<()> {
        self.process_requests()?;

        let now = self.clock.now();
        let Some(active) = self.process.as_mut() else {
            return Ok(());
        };
        let direction = active.process.direction();

        match active.process.advance(now) {
            Step::Progress {
                progress,
                background,
            } => self.render(direction, progress, background),
            Step::Complete => {
                if let Some(active) = self.process.take() {
                    self.complete(direction, active.on_completed);
                }
            }
        }

        self.process_requests()
    }

    /// Handle every queued command.
    pub fn process_requests(&mut self) -> Result<()> {
        for _ in 0..MAX_REQUESTS_PER_DRAIN {
            let Some(command) = self.requests.pop() else {
                return Ok(());
            };
            tracing::trace!(target: targets::PANEL, ?command, "processing request");
            match command {
                PanelCommand::Open => self.start_open(None)?,
                PanelCommand::Close => self.start_close(None)?,
                PanelCommand::OpenImmediately => self.snap_open()?,
                PanelCommand::CloseImmediately => self.snap_close()?,
                PanelCommand::BackgroundClicked => self.on_background_clicked()?,
            }
        }

        if self.requests.pending() > 0 {
            tracing::warn!(
                target: targets::PANEL,
                pending = self.requests.pending(),
                "request queue did not settle, deferring the rest to the next tick"
            );
        }
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn attach(&mut self) -> Result<()> {
        self.state = match self.config.initial_state {
            Some(state @ (PanelState::Closed | PanelState::Opened)) => state,
            Some(state) => return Err(PanelError::InvalidInitialState(state)),
            None if self.surfaces.gate.blocks_input() => PanelState::Opened,
            None => PanelState::Closed,
        };
        if self.surfaces.window.is_some() {
            self.attach_action()?;
        }

        if let Some(id) = self.background_connection.take() {
            if let Some(background) = &self.surfaces.background {
                background.clicked().disconnect(id);
            }
        }
        if self.mode == PlaybackMode::Playing {
            if let Some(background) = &self.surfaces.background {
                let requests = self.requests.clone();
                let id = background
                    .clicked()
                    .connect(move |_| requests.push(PanelCommand::BackgroundClicked));
                self.background_connection = Some(id);
            }
        }

        tracing::debug!(
            target: targets::PANEL,
            state = ?self.state,
            variant = self.action.name(),
            mode = ?self.mode,
            "panel attached"
        );
        Ok(())
    }

    fn attach_action(&mut self) -> Result<()> {
        let Some(window) = &self.surfaces.window else {
            return Err(PanelError::MissingSurface(SurfaceRole::Window));
        };
        let ctx = ActionContext {
            window,
            panel_rect: self.surfaces.gate.rect(),
            mode: self.mode,
        };
        self.action.attach(&ctx, self.state)
    }

    fn set_state(&mut self, next: PanelState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal panel transition {:?} -> {:?}",
            self.state,
            next
        );
        tracing::debug!(target: targets::PANEL, from = ?self.state, to = ?next, "state changed");
        self.state = next;
        self.state_changed.emit(next);
    }

    fn window_surface(&self) -> Option<&Surface> {
        self.surfaces.window.as_ref()
    }

    fn run_action(&mut self, direction: Direction, progress: f32) {
        let Some(window) = &self.surfaces.window else {
            return;
        };
        let ctx = ActionContext {
            window,
            panel_rect: self.surfaces.gate.rect(),
            mode: self.mode,
        };
        match direction {
            Direction::Open => self.action.open_action(&ctx, progress),
            Direction::Close => self.action.close_action(&ctx, progress),
        }
    }

    fn set_background_alpha(&self, alpha: f32) {
        if let Some(background) = &self.surfaces.background {
            background.set_alpha(alpha);
        }
    }

    fn set_window_blocks_input(&self, blocks_input: bool) {
        if let Some(window) = self.window_surface() {
            window.set_blocks_input(blocks_input);
        }
    }

    fn render(&mut self, direction: Direction, progress: f32, background: f32) {
        self.run_action(direction, progress);
        self.set_background_alpha(background);
    }

    fn begin(&mut self, direction: Direction, on_completed: Option<CompletionCallback>) {
        self.cancel_transition();
        let duration = match direction {
            Direction::Open => self.config.open_duration,
            Direction::Close => self.config.close_duration,
        };
        let (process, first) = TransitionProcess::start(direction, duration);
        self.process = Some(ActiveTransition {
            process,
            on_completed,
        });
        if let Step::Progress {
            progress,
            background,
        } = first
        {
            self.render(direction, progress, background);
        }
    }

    fn start_open(&mut self, on_completed: Option<CompletionCallback>) -> Result<()> {
        if self.state.is_open_or_opening() {
            tracing::warn!(target: targets::PANEL, state = ?self.state, "open ignored: panel is already opening or opened");
            return Ok(());
        }
        self.surfaces.validate()?;

        self.pre_open.emit(());
        self.set_state(PanelState::Opening);

        self.surfaces.gate.set_alpha(1.0);
        self.surfaces.gate.set_blocks_input(true);
        self.set_window_blocks_input(false);

        self.begin(Direction::Open, on_completed);
        Ok(())
    }

    fn start_close(&mut self, on_completed: Option<CompletionCallback>) -> Result<()> {
        if self.state.is_closed_or_closing() {
            tracing::warn!(target: targets::PANEL, state = ?self.state, "close ignored: panel is already closing or closed");
            return Ok(());
        }
        self.surfaces.validate()?;

        self.pre_close.emit(());
        self.set_state(PanelState::Closing);

        self.set_window_blocks_input(false);

        self.begin(Direction::Close, on_completed);
        Ok(())
    }

    fn complete(&mut self, direction: Direction, on_completed: Option<CompletionCallback>) {
        match direction {
            Direction::Open => {
                self.set_window_blocks_input(true);
                if let Some(callback) = on_completed {
                    callback();
                }
                self.set_state(PanelState::Opened);
                self.opened.emit(());
            }
            Direction::Close => {
                if let Some(callback) = on_completed {
                    callback();
                }
                self.surfaces.gate.set_alpha(0.0);
                self.surfaces.gate.set_blocks_input(false);
                self.set_window_blocks_input(false);
                self.set_state(PanelState::Closed);
                self.closed.emit(());
            }
        }
    }

    fn snap_open(&mut self) -> Result<()> {
        if self.state == PanelState::Opened {
            tracing::debug!(target: targets::PANEL, "open_immediately ignored: panel is already opened");
            return Ok(());
        }
        self.surfaces.validate()?;
        self.cancel_transition();

        if self.state != PanelState::Opening {
            self.pre_open.emit(());
            self.set_state(PanelState::Opening);
        }

        self.run_action(Direction::Open, 1.0);
        self.surfaces.gate.set_alpha(1.0);
        self.surfaces.gate.set_blocks_input(true);
        self.set_background_alpha(1.0);
        self.set_window_blocks_input(true);

        self.set_state(PanelState::Opened);
        self.opened.emit(());
        Ok(())
    }

    fn snap_close(&mut self) -> Result<()> {
        if self.state == PanelState::Closed {
            tracing::debug!(target: targets::PANEL, "close_immediately ignored: panel is already closed");
            return Ok(());
        }
        self.surfaces.validate()?;
        self.cancel_transition();

        if self.state != PanelState::Closing {
            self.pre_close.emit(());
            self.set_state(PanelState::Closing);
        }

        self.run_action(Direction::Close, 1.0);
        self.surfaces.gate.set_alpha(0.0);
        self.surfaces.gate.set_blocks_input(false);
        self.set_background_alpha(0.0);
        self.set_window_blocks_input(false);

        self.set_state(PanelState::Closed);
        self.closed.emit(());
        Ok(())
    }

    fn on_background_clicked(&mut self) -> Result<()> {
        if self.config.close_on_background_clicked && self.state == PanelState::Opened {
            self.start_close(None)?;
        }
        if self.config.skip_opening_on_clicked && self.state == PanelState::Opening {
            self.snap_open()?;
        }
        Ok(())
    }
}

impl Drop for WindowPanel {
    fn drop(&mut self) {
        if let (Some(id), Some(background)) =
            (self.background_connection.take(), &self.surfaces.background)
        {
            background.clicked().disconnect(id);
        }
    }
}

impl fmt::Debug for WindowPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowPanel")
            .field("state", &self.state)
            .field("variant", &self.action.name())
            .field("mode", &self.mode)
            .field("transition", &self.transition_direction())
            .field("surfaces", &self.surfaces)
            .finish_non_exhaustive()
    }
}
