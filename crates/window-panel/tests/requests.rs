//! Integration tests for commands issued from inside callbacks.

mod common;

use window_panel::prelude::*;

use common::{Counter, FRAME, Harness};

#[test]
fn test_reopen_from_closed_hook() {
    let harness = Harness::opened();
    let mut panel = harness.panel(PanelConfig::default());
    let requests = panel.requests();
    panel.closed().connect(move |_| requests.open());
    let pre_open = Counter::watch(panel.pre_open());
    let closed = Counter::watch(panel.closed());

    panel.close().unwrap();
    while closed.get() == 0 {
        panel.tick().unwrap();
        harness.clock.advance_secs(FRAME);
    }

    // The queued open starts in the same tick the close completed.
    assert_eq!(pre_open.get(), 1);
    assert_eq!(panel.state(), PanelState::Opening);
    assert!(panel.is_transitioning());
}

#[test]
fn test_close_from_pre_open_hook() {
    let harness = Harness::closed();
    let mut panel = harness.panel(PanelConfig::default());
    let requests = panel.requests();
    panel.pre_open().connect(move |_| requests.close_immediately());

    panel.open().unwrap();
    assert_eq!(panel.state(), PanelState::Closed);
    assert!(!panel.is_transitioning());
}

#[test]
fn test_queued_commands_run_in_order() {
    let harness = Harness::closed();
    let mut panel = harness.panel(PanelConfig::default());
    let requests = panel.requests();

    requests.open_immediately();
    requests.close();
    assert_eq!(requests.pending(), 2);

    panel.tick().unwrap();
    assert_eq!(requests.pending(), 0);
    assert_eq!(panel.state(), PanelState::Closing);
}

#[test]
fn test_ping_pong_callbacks_do_not_hang() {
    let harness = Harness::closed();
    let mut panel = harness.panel(PanelConfig::default());
    let requests = panel.requests();
    panel.opened().connect(move |_| requests.close_immediately());
    let requests = panel.requests();
    panel.closed().connect(move |_| requests.open_immediately());

    panel.open_immediately().unwrap();
    // The queue is drained in bounded batches; leftovers wait for a tick.
    assert!(panel.requests().pending() > 0);
    panel.tick().unwrap();
}

#[test]
fn test_reattach_discards_queue() {
    let harness = Harness::closed();
    let mut panel = harness.panel(PanelConfig::default());
    let requests = panel.requests();

    panel.open().unwrap();
    requests.close();
    panel.reattach().unwrap();

    assert_eq!(requests.pending(), 0);
    assert!(!panel.is_transitioning());
}
