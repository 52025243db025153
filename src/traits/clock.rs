//! Time source for deadline checks.

use crate::domain::Timestamp;

/// Supplies the current time to the pool engine.
///
/// Deadlines are checked once, at operation entry, against
/// [`Clock::now`].
///
/// # Implementors
///
/// - [`SystemClock`](crate::ledger::SystemClock): wall-clock time.
/// - [`ManualClock`](crate::ledger::ManualClock): a settable clock for
///   simulations and tests.
pub trait Clock {
    /// Returns the current time.
    #[must_use]
    fn now(&self) -> Timestamp;
}
