//! Time sources for trial measurement.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A source of monotonic timestamps.
///
/// Readings are offsets from an arbitrary origin fixed when the clock was
/// created. Only differences between two readings are meaningful.
pub trait Clock {
    /// Current reading.
    fn now(&self) -> Duration;

    /// Short identifier shown in reports.
    fn name(&self) -> &'static str;

    /// Block for `pause` as seen by this clock.
    fn sleep(&self, pause: Duration) {
        std::thread::sleep(pause);
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn sleep(&self, pause: Duration) {
        (**self).sleep(pause)
    }
}

/// Wall-clock time from [`std::time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn name(&self) -> &'static str {
        "instant"
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a workload can hold one handle and
/// advance time by a scripted amount while the timer reads another.
///
/// ```
/// use std::time::Duration;
/// use bitgems::measurement::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(Duration::from_millis(5));
/// assert_eq!(clock.now(), Duration::from_millis(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.nanos.fetch_add(nanos, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }

    fn name(&self) -> &'static str {
        "manual"
    }

    /// Advances the reading instead of blocking.
    fn sleep(&self, pause: Duration) {
        self.advance(pause);
    }
}
