//! Prelude module for Window Panel.
//!
//! ```ignore
//! use window_panel::prelude::*;
//! ```

// ============================================================================
// Core
// ============================================================================

pub use window_panel_core::{Clock, ConnectionId, ManualClock, Point, Rect, Signal, Size, SystemClock};

// ============================================================================
// Panel
// ============================================================================

pub use crate::panel::{
    ActionContext, AnimatedAction, Direction, FadeAction, Outer, PanelCommand, PanelRequests,
    PanelState, PanelSurfaces, PlaybackMode, SlideInAction, WindowAction, WindowPanel,
};
pub use crate::surface::Surface;

// ============================================================================
// Animation
// ============================================================================

pub use crate::animation::{AnimationCurve, Easing, EasingCurve, Keyframe};
pub use crate::animator::{
    AnimationClip, Animator, AnimatorController, AnimatorLayer, AnimatorStateDef,
    AnimatorStateInfo, ClipAnimator, ClipProperty, CurveClip,
};

// ============================================================================
// Configuration and errors
// ============================================================================

pub use crate::config::{PanelConfig, VariantConfig};
pub use crate::error::{PanelError, Result};
