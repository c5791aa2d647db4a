//! Window Panel - animated show/hide panels for UI overlays.
//!
//! A [`WindowPanel`] sits on top of the UI and owns three surfaces: a gate
//! for the whole panel, the interactive window and a dimming background.
//! Opening and closing run as per-frame transitions; how the window looks
//! along the way is up to a pluggable [`WindowAction`]:
//!
//! - [`FadeAction`]: cross-fades the window
//! - [`SlideInAction`]: slides the window in from a screen edge
//! - [`AnimatedAction`]: plays open/close states of an animation graph
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use window_panel::prelude::*;
//!
//! fn main() -> window_panel::Result<()> {
//!     let clock = ManualClock::new();
//!     let window = Surface::new("window");
//!     let surfaces = PanelSurfaces::new(Surface::new("panel").with_blocks_input(false))
//!         .with_window(window.clone())
//!         .with_background(Surface::new("background"));
//!
//!     let config = PanelConfig::default().with_variant(VariantConfig::SlideIn {
//!         entry_outer: Outer::Up,
//!         exit_outer: Outer::Down,
//!         easing_curve: EasingCurve::default(),
//!     });
//!     let mut panel = WindowPanel::builder(surfaces)
//!         .config(config)
//!         .clock(Arc::new(clock.clone()))
//!         .build()?;
//!
//!     panel.opened().connect(|_| println!("opened"));
//!     panel.open()?;
//!     while panel.is_transitioning() {
//!         panel.tick()?;
//!         clock.advance_secs(1.0 / 60.0);
//!     }
//!     assert_eq!(window.anchored_position(), Point::ZERO);
//!     Ok(())
//! }
//! ```

pub mod animation;
pub mod animator;
pub mod config;
pub mod error;
pub mod panel;
pub mod prelude;
pub mod surface;

pub use window_panel_core::*;

pub use animator::{Animator, AnimationClip, AnimatorController, ClipAnimator};
pub use config::{PanelConfig, VariantConfig};
pub use error::{PanelError, Result};
pub use panel::{
    AnimatedAction, FadeAction, PanelState, PanelSurfaces, SlideInAction, WindowAction,
    WindowPanel,
};
pub use surface::Surface;
