//! Core systems for Window Panel.
//!
//! This crate provides the foundations the panel state machine is built on:
//!
//! - **Signal/Slot System**: Synchronous observer lists for lifecycle hooks
//! - **Clocks**: Unscaled time sources, real and manual
//! - **Geometry**: Points, sizes and rectangles for panel placement
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use window_panel_core::Signal;
//!
//! let closed = Signal::<()>::new();
//! let conn_id = closed.connect(|_| println!("closed"));
//! closed.emit(());
//! closed.disconnect(conn_id);
//! ```

pub mod clock;
pub mod geometry;
pub mod logging;
pub mod signal;

pub use clock::{Clock, ManualClock, SystemClock};
pub use geometry::{Point, Rect, Size};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
