//! Error types for window panels.

use crate::panel::PanelState;

/// Result type alias for panel operations.
pub type Result<T> = std::result::Result<T, PanelError>;

/// Errors that can occur while configuring or driving a panel.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// A required surface was not wired up.
    #[error("Window panel requires a {0} surface")]
    MissingSurface(SurfaceRole),

    /// The persisted initial state cannot be used as a starting point.
    #[error("Invalid initial panel state {0:?}: only Closed or Opened can be persisted")]
    InvalidInitialState(PanelState),

    /// No component of the requested type is attached to the window surface.
    #[error("Window surface has no component of type {0}")]
    ComponentNotFound(&'static str),

    /// The animator's controller has no state with this name on the layer.
    #[error("Animation state '{state}' not found on layer {layer}")]
    AnimationStateNotFound { state: String, layer: usize },

    /// The named animation state has no clip to sample.
    #[error("Animation state '{0}' has no motion clip")]
    MissingMotion(String),

    /// The animator has no controller bound.
    #[error("Animator has no controller bound")]
    NoController,

    /// The configuration document could not be parsed.
    #[error("Invalid panel configuration: {0}")]
    Config(String),
}

impl PanelError {
    /// Create an animation-state lookup error.
    pub fn state_not_found(state: impl Into<String>, layer: usize) -> Self {
        Self::AnimationStateNotFound {
            state: state.into(),
            layer,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl ToString) -> Self {
        Self::Config(message.to_string())
    }
}

/// The role a surface plays inside a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceRole {
    /// The interactive content.
    Window,
    /// The dimming overlay behind the window.
    Background,
}

impl std::fmt::Display for SurfaceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Window => write!(f, "window"),
            Self::Background => write!(f, "background"),
        }
    }
}
