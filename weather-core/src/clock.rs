use parking_lot::Mutex;
use std::{
    fmt::Debug,
    time::{Duration, Instant},
};

/// Monotonic source of "now" for anything that ages out.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves forward, and only when told to. Used to test expiry
/// deterministically.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { base: Instant::now(), offset: Mutex::new(Duration::ZERO) }
    }

    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.lock();
        let next = offset.saturating_add(by);
        // Stay within what `Instant` can represent so `now` never wraps.
        if self.base.checked_add(next).is_some() {
            *offset = next;
        }
    }

    /// Time advanced since construction.
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
        let offset = *self.offset.lock();
        self.base.checked_add(offset).unwrap_or(self.base)
    }
}
