//! Clock implementations.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::Timestamp;
use crate::traits::Clock;

/// Wall-clock time in whole seconds since the Unix epoch.
///
/// A system clock set before the epoch reads as [`Timestamp::EPOCH`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Timestamp::from_secs(secs)
    }
}

/// A clock that only moves when told to.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Timestamp;
/// use hydra_cpmm::ledger::ManualClock;
/// use hydra_cpmm::traits::Clock;
///
/// let clock = ManualClock::new(Timestamp::from_secs(100));
/// clock.advance(5);
/// assert_eq!(clock.now(), Timestamp::from_secs(105));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Cell<Timestamp>,
}

impl ManualClock {
    /// Creates a clock reading `start`.
    #[must_use]
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Sets the current time.
    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }

    /// Moves the clock forward by `secs`.
    pub fn advance(&self, secs: u64) {
        self.now.set(self.now.get().plus_secs(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}
