//! Signed change to a single reserve.

use core::fmt;

use super::Amount;

/// A signed adjustment to one reserve.
///
/// Represented as a direction plus an unsigned magnitude so the full
/// `u128` range stays available in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReserveDelta {
    /// Add the amount to the reserve.
    Increase(Amount),
    /// Remove the amount from the reserve.
    Decrease(Amount),
}

impl ReserveDelta {
    /// Returns the unsigned magnitude of the change.
    pub const fn magnitude(&self) -> Amount {
        match self {
            Self::Increase(a) | Self::Decrease(a) => *a,
        }
    }
}

impl fmt::Display for ReserveDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increase(a) => write!(f, "+{a}"),
            Self::Decrease(a) => write!(f, "-{a}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_and_display() {
        let up = ReserveDelta::Increase(Amount::new(5));
        let down = ReserveDelta::Decrease(Amount::new(7));
        assert_eq!(up.magnitude(), Amount::new(5));
        assert_eq!(down.magnitude(), Amount::new(7));
        assert_eq!(up.to_string(), "+5");
        assert_eq!(down.to_string(), "-7");
    }
}
