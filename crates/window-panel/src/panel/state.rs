//! Panel lifecycle states.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a window panel.
///
/// State machine: Closed → Opening → Opened → Closing → Closed
///
/// A transition in flight may be reversed (Opening ↔ Closing) by issuing
/// the opposite command; Closed and Opened are never adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    /// Hidden and inert.
    #[default]
    Closed,
    /// Animating in.
    Opening,
    /// Fully shown and interactive.
    Opened,
    /// Animating out.
    Closing,
}

impl PanelState {
    /// Whether the panel is fully at rest.
    #[inline]
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Closed | Self::Opened)
    }

    /// Whether a transition is in progress.
    #[inline]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }

    /// Whether the panel is opening or opened.
    #[inline]
    pub fn is_open_or_opening(self) -> bool {
        matches!(self, Self::Opening | Self::Opened)
    }

    /// Whether the panel is closing or closed.
    #[inline]
    pub fn is_closed_or_closing(self) -> bool {
        matches!(self, Self::Closing | Self::Closed)
    }

    /// Whether moving from `self` to `next` is a legal edge.
    pub fn can_transition_to(self, next: PanelState) -> bool {
        matches!(
            (self, next),
            (Self::Closed, Self::Opening)
                | (Self::Opening, Self::Opened)
                | (Self::Opened, Self::Closing)
                | (Self::Closing, Self::Closed)
                | (Self::Opening, Self::Closing)
                | (Self::Closing, Self::Opening)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PanelState; 4] = [
        PanelState::Closed,
        PanelState::Opening,
        PanelState::Opened,
        PanelState::Closing,
    ];

    #[test]
    fn test_no_direct_closed_opened_edge() {
        assert!(!PanelState::Closed.can_transition_to(PanelState::Opened));
        assert!(!PanelState::Opened.can_transition_to(PanelState::Closed));
    }

    #[test]
    fn test_no_self_edges() {
        for state in ALL {
            assert!(!state.can_transition_to(state));
        }
    }

    #[test]
    fn test_forward_cycle() {
        assert!(PanelState::Closed.can_transition_to(PanelState::Opening));
        assert!(PanelState::Opening.can_transition_to(PanelState::Opened));
        assert!(PanelState::Opened.can_transition_to(PanelState::Closing));
        assert!(PanelState::Closing.can_transition_to(PanelState::Closed));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&PanelState::Opened).unwrap();
        assert_eq!(json, "\"opened\"");
        let state: PanelState = serde_json::from_str("\"closing\"").unwrap();
        assert_eq!(state, PanelState::Closing);
        assert!(serde_json::from_str::<PanelState>("\"ajar\"").is_err());
    }
}
