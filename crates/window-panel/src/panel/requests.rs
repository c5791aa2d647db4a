//! Deferred commands for re-entrant callers.
//!
//! Lifecycle slots and pointer handlers run while the panel is busy and
//! cannot borrow it. They push commands onto a [`PanelRequests`] handle
//! instead; the panel drains the queue as soon as the current operation
//! returns, and again at the start of every tick.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

/// A command queued for a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelCommand {
    /// Start an opening transition.
    Open,
    /// Start a closing transition.
    Close,
    /// Snap to Opened.
    OpenImmediately,
    /// Snap to Closed.
    CloseImmediately,
    /// The background overlay was clicked.
    BackgroundClicked,
}

/// Cloneable handle for queueing commands on a panel.
#[derive(Debug, Clone, Default)]
pub struct PanelRequests {
    queue: Arc<Mutex<VecDeque<PanelCommand>>>,
}

impl PanelRequests {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an arbitrary command.
    pub fn push(&self, command: PanelCommand) {
        self.queue.lock().push_back(command);
    }

    /// Queue an opening transition.
    pub fn open(&self) {
        self.push(PanelCommand::Open);
    }

    /// Queue a closing transition.
    pub fn close(&self) {
        self.push(PanelCommand::Close);
    }

    /// Queue an immediate open.
    pub fn open_immediately(&self) {
        self.push(PanelCommand::OpenImmediately);
    }

    /// Queue an immediate close.
    pub fn close_immediately(&self) {
        self.push(PanelCommand::CloseImmediately);
    }

    /// Number of commands waiting.
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    pub(crate) fn pop(&self) -> Option<PanelCommand> {
        self.queue.lock().pop_front()
    }

    pub(crate) fn clear(&self) {
        self.queue.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let requests = PanelRequests::new();
        let handle = requests.clone();
        handle.open();
        handle.close_immediately();

        assert_eq!(requests.pending(), 2);
        assert_eq!(requests.pop(), Some(PanelCommand::Open));
        assert_eq!(requests.pop(), Some(PanelCommand::CloseImmediately));
        assert_eq!(requests.pop(), None);
    }
}
