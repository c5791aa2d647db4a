//! Logging facilities for Window Panel.
//!
//! Window Panel uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("window_panel=debug")
//!     .init();
//! ```
//!
//! State changes are logged at `debug`, per-tick transition progress at
//! `trace`, and redundant commands at `warn`.

/// Span names used throughout Window Panel for tracing.
pub mod span_names {
    /// Lifetime of a single open or close transition.
    pub const TRANSITION: &str = "window_panel::transition";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Panel state machine target.
    pub const PANEL: &str = "window_panel::panel";
    /// Transition process target.
    pub const TRANSITION: &str = "window_panel::transition";
    /// Animation graph player target.
    pub const ANIMATOR: &str = "window_panel::animator";
    /// Configuration loading target.
    pub const CONFIG: &str = "window_panel::config";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "window_panel_core::signal";
    /// Performance spans target.
    pub const PERF: &str = "window_panel::perf";
}

/// A guard that keeps a performance span alive until dropped.
///
/// Unlike an entered span, a `PerfSpan` can be stored inside long-lived
/// state (a transition that spans many frames) and reports its total
/// wall-clock lifetime when it is dropped.
pub struct PerfSpan {
    span: tracing::Span,
    operation: &'static str,
    started: std::time::Instant,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::debug_span!(target: "window_panel::perf", "perf", operation);
        Self {
            span,
            operation,
            started: std::time::Instant::now(),
        }
    }

    /// The operation this span measures.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// The underlying tracing span, for attaching child events.
    pub fn span(&self) -> &tracing::Span {
        &self.span
    }
}

impl Drop for PerfSpan {
    fn drop(&mut self) {
        let _entered = self.span.enter();
        tracing::debug!(
            target: targets::PERF,
            operation = self.operation,
            elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0,
            "span finished"
        );
    }
}

impl std::fmt::Debug for PerfSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerfSpan")
            .field("operation", &self.operation)
            .finish_non_exhaustive()
    }
}
