//! Points in time used for operation deadlines.

use core::fmt;

/// Seconds since the Unix epoch.
///
/// Deadlines are inclusive: an operation whose deadline equals the current
/// time is still accepted.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Timestamp;
///
/// let deadline = Timestamp::from_secs(1_700_000_000);
/// assert!(!deadline.has_passed(Timestamp::from_secs(1_700_000_000)));
/// assert!(deadline.has_passed(Timestamp::from_secs(1_700_000_001)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(u64);

impl Timestamp {
    /// The Unix epoch.
    pub const EPOCH: Self = Self(0);

    /// The latest representable time; useful as a "no deadline" value.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a timestamp from whole seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the number of seconds since the epoch.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns `true` if `now` is strictly later than this deadline.
    #[must_use]
    pub const fn has_passed(&self, now: Self) -> bool {
        now.0 > self.0
    }

    /// Returns this timestamp advanced by `secs`, saturating at [`Timestamp::MAX`].
    #[must_use]
    pub const fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_is_inclusive() {
        let d = Timestamp::from_secs(10);
        assert!(!d.has_passed(Timestamp::from_secs(9)));
        assert!(!d.has_passed(Timestamp::from_secs(10)));
        assert!(d.has_passed(Timestamp::from_secs(11)));
    }

    #[test]
    fn max_never_passes() {
        assert!(!Timestamp::MAX.has_passed(Timestamp::from_secs(u64::MAX)));
    }

    #[test]
    fn plus_secs_saturates() {
        assert_eq!(Timestamp::from_secs(5).plus_secs(5), Timestamp::from_secs(10));
        assert_eq!(Timestamp::MAX.plus_secs(1), Timestamp::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(Timestamp::from_secs(42).to_string(), "42s");
    }
}
