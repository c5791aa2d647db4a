//! Unscaled time sources for per-frame updates.
//!
//! Transitions measure wall-clock time that is unaffected by any gameplay
//! time scaling or pause, so UI keeps animating while the simulation is
//! frozen. A [`Clock`] is the only thing a panel asks about time.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// A source of unscaled, monotonic time.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// The real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the panel under test.
#[derive(Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    /// Create a manual clock frozen at its creation instant.
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        *self.offset.lock() += by;
    }

    /// Move time forward by a number of seconds.
    ///
    /// Negative or non-finite values are ignored.
    pub fn advance_secs(&self, secs: f32) {
        if let Ok(by) = Duration::try_from_secs_f32(secs) {
            self.advance(by);
        }
    }

    /// Total time elapsed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        *self.offset.lock()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock()
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("elapsed", &self.elapsed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_is_frozen() {
        let clock = ManualClock::new();
        let a = clock.now();
        let b = clock.now();
        assert_eq!(a, b);
    }

    #[test]
    fn test_manual_clock_advance_shared() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        let start = clock.now();

        handle.advance(Duration::from_millis(250));
        handle.advance_secs(0.25);

        assert_eq!(clock.now() - start, Duration::from_millis(500));
        assert_eq!(clock.elapsed(), Duration::from_millis(500));
    }

    #[test]
    fn test_manual_clock_ignores_negative() {
        let clock = ManualClock::new();
        clock.advance_secs(-1.0);
        clock.advance_secs(f32::NAN);
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_system_clock_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
