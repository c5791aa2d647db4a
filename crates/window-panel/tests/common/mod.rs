//! Shared fixtures for window panel integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;
use window_panel::prelude::*;

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Frame length used when running transitions to the end.
pub const FRAME: f32 = 1.0 / 60.0;

/// A panel rectangle of 800x600.
pub const PANEL_RECT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

/// The surfaces and clock a panel under test is wired to.
pub struct Harness {
    pub clock: ManualClock,
    pub gate: Surface,
    pub window: Surface,
    pub background: Surface,
}

impl Harness {
    /// Surfaces for a panel that starts Closed.
    pub fn closed() -> Self {
        init_tracing();
        Self {
            clock: ManualClock::new(),
            gate: Surface::new("panel")
                .with_rect(PANEL_RECT)
                .with_blocks_input(false),
            window: Surface::new("window"),
            background: Surface::new("background"),
        }
    }

    /// Surfaces for a panel that starts Opened.
    pub fn opened() -> Self {
        let harness = Self::closed();
        harness.gate.set_blocks_input(true);
        harness
    }

    pub fn surfaces(&self) -> PanelSurfaces {
        PanelSurfaces::new(self.gate.clone())
            .with_window(self.window.clone())
            .with_background(self.background.clone())
    }

    /// Build a panel with `config` on the manual clock.
    pub fn panel(&self, config: PanelConfig) -> WindowPanel {
        WindowPanel::builder(self.surfaces())
            .config(config)
            .clock(Arc::new(self.clock.clone()))
            .build()
            .unwrap()
    }

    /// Build a panel with an explicit action on the manual clock.
    pub fn panel_with(&self, config: PanelConfig, action: impl WindowAction + 'static) -> WindowPanel {
        WindowPanel::builder(self.surfaces())
            .config(config)
            .action(action)
            .clock(Arc::new(self.clock.clone()))
            .build()
            .unwrap()
    }

    /// Tick at 60 frames per second until no transition is in flight.
    ///
    /// Returns the number of ticks taken.
    pub fn run_to_end(&self, panel: &mut WindowPanel) -> usize {
        let mut ticks = 0;
        while panel.is_transitioning() {
            panel.tick().unwrap();
            self.clock.advance_secs(FRAME);
            ticks += 1;
            assert!(ticks < 10_000, "transition never completed");
        }
        ticks
    }
}

/// Counts how often a signal fired.
#[derive(Clone, Default)]
pub struct Counter(Arc<Mutex<usize>>);

impl Counter {
    pub fn watch<T: 'static>(signal: &Signal<T>) -> Self {
        let counter = Self::default();
        let inner = counter.0.clone();
        signal.connect(move |_| *inner.lock() += 1);
        counter
    }

    pub fn get(&self) -> usize {
        *self.0.lock()
    }
}

/// Records every progress value it is driven with.
#[derive(Clone, Default)]
pub struct RecordingAction {
    pub calls: Arc<Mutex<Vec<(Direction, f32)>>>,
}

impl RecordingAction {
    pub fn calls(&self) -> Vec<(Direction, f32)> {
        self.calls.lock().clone()
    }
}

impl WindowAction for RecordingAction {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn open_action(&mut self, ctx: &ActionContext<'_>, progress: f32) {
        ctx.window.set_alpha(progress);
        self.calls.lock().push((Direction::Open, progress));
    }

    fn close_action(&mut self, ctx: &ActionContext<'_>, progress: f32) {
        ctx.window.set_alpha(1.0 - progress);
        self.calls.lock().push((Direction::Close, progress));
    }
}
